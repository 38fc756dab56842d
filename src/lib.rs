pub mod app_core;
pub mod overlay;
pub mod runtime;
pub mod view;

pub use app_core::{AppCore, AppSubscription};
pub use overlay::{CompletionOverlay, FadeAnimation, OVERLAY_FADE_MS};
pub use runtime::{attach_view, GameView, ViewHooks, ViewWiring};
pub use view::{
    build_item_instances, build_line_instances, ItemInstance, LineInstance, ViewLayout,
};
