use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::Rng;
use tentsunagi_core::{session_seed, BoardSnapshot, CoreAction, CoreState, SESSION_SEED_BASE};

type Observer = Rc<dyn Fn()>;

/// Single owner of the session state. Views dispatch actions in and read
/// immutable snapshots out; every applied transition notifies subscribers
/// once. Tap events are serialized by construction since `dispatch` runs
/// synchronously to completion.
pub struct AppCore {
    state: RefCell<CoreState>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer: Cell<u64>,
    was_solved: Cell<bool>,
}

impl AppCore {
    /// Fresh session with a randomized column layout.
    pub fn new_session() -> Rc<Self> {
        let nonce: u32 = rand::rng().random();
        Self::from_seed(session_seed(SESSION_SEED_BASE, nonce))
    }

    pub fn from_seed(seed: u32) -> Rc<Self> {
        tracing::info!(seed, "starting session");
        Rc::new(Self {
            state: RefCell::new(CoreState::new(seed)),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
            was_solved: Cell::new(false),
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.borrow().snapshot()
    }

    /// Applies one action and notifies subscribers. Returns whether the core
    /// accepted it; rejected input (out-of-domain id) notifies nobody.
    pub fn dispatch(&self, action: CoreAction) -> bool {
        let applied = self.state.borrow_mut().apply(action);
        if !applied {
            tracing::warn!(?action, "dropped action with invalid item id");
            return false;
        }
        let solved = self.state.borrow().solved;
        if solved && !self.was_solved.get() {
            tracing::info!("board complete");
        }
        self.was_solved.set(solved);
        self.notify();
        true
    }

    pub fn subscribe(self: &Rc<Self>, observer: Observer) -> AppSubscription {
        let id = self.next_observer.get();
        self.next_observer.set(id + 1);
        self.observers.borrow_mut().push((id, observer));
        AppSubscription {
            core: Rc::downgrade(self),
            id,
        }
    }

    fn notify(&self) {
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer();
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.observers
            .borrow_mut()
            .retain(|(entry, _)| *entry != id);
    }
}

/// Keeps an observer registered; dropping it detaches the observer.
pub struct AppSubscription {
    core: std::rc::Weak<AppCore>,
    id: u64,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        if let Some(core) = self.core.upgrade() {
            core.unsubscribe(self.id);
        }
    }
}
