// Custom Dioxus hooks
pub mod use_notifications;
pub mod use_toolbar;

pub use use_notifications::{use_notifications, use_notifications_provider, Notifications};
pub use use_toolbar::{use_toolbar, use_toolbar_provider, ToolbarContext, ToolbarDialog};
