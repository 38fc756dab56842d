use std::cell::RefCell;
use std::rc::Rc;

use tentsunagi_core::{BoardSnapshot, CoreAction};

use crate::app_core::{AppCore, AppSubscription};

#[derive(Clone)]
pub struct ViewHooks {
    pub on_action: Rc<dyn Fn(CoreAction)>,
}

/// Seam between the core and whatever draws the board. A view forwards raw
/// taps through its hooks and re-renders from each emitted snapshot; it never
/// owns or mutates game state.
pub trait GameView {
    fn init(&mut self, hooks: ViewHooks);
    fn render(&mut self, snapshot: &BoardSnapshot);
    fn shutdown(&mut self);
}

/// Keeps a view wired to the core. Dropping it detaches the observer and
/// calls the view's `shutdown`.
pub struct ViewWiring {
    subscription: Option<AppSubscription>,
    view: Rc<RefCell<dyn GameView>>,
}

impl Drop for ViewWiring {
    fn drop(&mut self) {
        self.subscription.take();
        self.view.borrow_mut().shutdown();
    }
}

/// Wires a view to the core: taps dispatch in, every transition renders out.
/// The returned wiring keeps the connection alive; an initial render with
/// the current snapshot happens before this returns.
pub fn attach_view(core: &Rc<AppCore>, view: Rc<RefCell<dyn GameView>>) -> ViewWiring {
    let core_for_hooks = core.clone();
    view.borrow_mut().init(ViewHooks {
        on_action: Rc::new(move |action| {
            core_for_hooks.dispatch(action);
        }),
    });
    let core_for_render = core.clone();
    let view_for_render = view.clone();
    let subscription = core.subscribe(Rc::new(move || {
        let snapshot = core_for_render.snapshot();
        view_for_render.borrow_mut().render(&snapshot);
    }));
    view.borrow_mut().render(&core.snapshot());
    ViewWiring {
        subscription: Some(subscription),
        view,
    }
}
