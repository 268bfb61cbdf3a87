use dioxus::prelude::*;
use uuid::Uuid;

use crate::domain::models::{Indicator, Notification};
use crate::shared::constants::NOTIFICATION_HISTORY_LIMIT;

/// Transient alerts plus the history shown under the bell
#[derive(Clone, Copy)]
pub struct Notifications {
    pub active: Signal<Vec<Notification>>,
    pub history: Signal<Vec<Notification>>,
}

impl Notifications {
    /// Show an alert; it dismisses itself after a fixed delay
    pub fn show_alert(mut self, message: impl Into<String>, indicator: Indicator) {
        let notification = Notification::new(message, indicator);
        let id = notification.id;

        push_capped(
            &mut self.history.write(),
            notification.clone(),
            NOTIFICATION_HISTORY_LIMIT,
        );
        self.active.write().push(notification);

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(
                crate::shared::constants::NOTIFICATION_LIFETIME_MS,
            )
            .await;
            self.dismiss(id);
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }

    pub fn dismiss(mut self, id: Uuid) {
        self.active.write().retain(|n| n.id != id);
    }

    pub fn clear_history(mut self) {
        self.history.write().clear();
    }
}

/// Append `notification`, dropping the oldest entries beyond `limit`
fn push_capped(history: &mut Vec<Notification>, notification: Notification, limit: usize) {
    history.push(notification);
    let overflow = history.len().saturating_sub(limit);
    history.drain(..overflow);
}

/// Create the notification context; call once at the layout root
pub fn use_notifications_provider() -> Notifications {
    let active = use_signal(Vec::<Notification>::new);
    let history = use_signal(Vec::<Notification>::new);
    use_context_provider(|| Notifications { active, history })
}

/// Notification context created by [`use_notifications_provider`]
pub fn use_notifications() -> Notifications {
    use_context::<Notifications>()
}
