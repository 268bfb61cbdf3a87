use dioxus::prelude::*;

use crate::shared::hooks::use_notifications;

/// Stack of transient alerts
#[component]
pub fn NotificationArea() -> Element {
    let notifications = use_notifications();

    rsx! {
        div { class: "c-alerts",
            for notification in notifications.active.read().iter().cloned() {
                div {
                    key: "{notification.id}",
                    class: "c-alert indicator-{notification.indicator.as_str()}",
                    span { class: "c-alert__message", "{notification.message}" }
                    button {
                        class: "c-alert__close",
                        aria_label: "Dismiss",
                        onclick: move |_| notifications.dismiss(notification.id),
                        "×"
                    }
                }
            }
        }
    }
}
