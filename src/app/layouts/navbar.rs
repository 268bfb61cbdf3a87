use dioxus::prelude::*;

use crate::app::components::{HelpDropdown, NotificationArea, PageMenu, SearchModal, ToolbarDropdown};
use crate::app::pages::Route;
use crate::server_fns::{get_boot_info, get_workspace_sidebar_items};
use crate::shared::errors::ToolbarError;
use crate::shared::hooks::{use_notifications, use_toolbar};
use crate::shared::logging::log_action_error;
use crate::toolbar::ToolbarAction;

/// Global keyboard shortcut
#[derive(Debug, Clone, PartialEq)]
pub enum Shortcut {
    Action(ToolbarAction),
    OpenSearch,
}

/// `?` opens the shortcut list, Ctrl+G the search modal
pub fn shortcut_for(key: &str, ctrl: bool) -> Option<Shortcut> {
    match (key, ctrl) {
        ("?", false) => Some(Shortcut::Action(ToolbarAction::ShowShortcuts)),
        ("g" | "G", true) => Some(Shortcut::OpenSearch),
        _ => None,
    }
}

/// Plain-key shortcuts are text when typed into a field; Ctrl combinations
/// and keys like Escape still reach the layout
pub fn field_keeps_key(key: &str, ctrl: bool) -> bool {
    !ctrl && shortcut_for(key, ctrl).is_some()
}

/// `onkeydown` body for text inputs inside the desk layout
pub fn keep_key_in_field(evt: &Event<KeyboardData>) {
    let modifiers = evt.modifiers();
    if field_keeps_key(&evt.key().to_string(), modifiers.ctrl() || modifiers.meta()) {
        evt.stop_propagation();
    }
}

/// Desk navbar: loads the page list once and re-resolves the page on every route change
#[component]
pub fn Navbar() -> Element {
    let toolbar = use_toolbar();
    let notifications = use_notifications();
    let route = use_route::<Route>();

    let sidebar = use_resource(|| async move {
        futures::try_join!(get_workspace_sidebar_items(), get_boot_info())
    });

    use_effect(move || match &*sidebar.read() {
        Some(Ok((items, boot))) => toolbar.install(items.clone(), boot.clone()),
        Some(Err(e)) => log_action_error("load_pages", &ToolbarError::Remote(e.to_string()).to_string()),
        None => {}
    });

    use_effect(use_reactive(&route, move |route| toolbar.on_page_change(&route)));

    use_effect(move || toolbar.set_fullwidth_if_enabled());

    let settings = toolbar
        .boot
        .read()
        .as_ref()
        .map(|boot| (boot.desk_settings, boot.is_guest()));
    let (show_search, show_bell) = match settings {
        Some((desk_settings, is_guest)) => {
            (desk_settings.search_bar, desk_settings.notifications && !is_guest)
        }
        None => (false, false),
    };

    let icon_links = toolbar.menus.read().icon_links().to_vec();
    let has_unread = !notifications.history.read().is_empty();

    rsx! {
        nav { class: "navbar c-navbar",
            div { class: "c-navbar__brand",
                Link { to: Route::Home {}, class: "navbar-home", "Desk" }
            }

            div { class: "navbar-collapse",
                PageMenu {}
            }

            if show_search {
                input {
                    id: "navbar-search",
                    class: "c-navbar__search",
                    r#type: "text",
                    placeholder: "Search or type a command (Ctrl + G)",
                    readonly: true,
                    onclick: move |_| {
                        let mut search_open = toolbar.search_open;
                        search_open.set(true);
                    },
                }
            }

            ul { class: "navbar-nav c-navbar__right",
                for link in icon_links {
                    li { key: "{link.route}", class: "{link.class_name}",
                        a {
                            href: "{link.route}",
                            title: "{link.title}",
                            span { class: "c-navbar__icon", "{link.icon}" }
                        }
                    }
                }

                if show_bell {
                    NotificationBell { has_unread }
                }

                HelpDropdown {}

                li { class: "dropdown dropdown-user",
                    ToolbarDropdown { menu: "user", label: "User" }
                }
            }
        }

        NotificationArea {}
        SearchModal {}
    }
}

#[component]
fn NotificationBell(has_unread: bool) -> Element {
    let notifications = use_notifications();
    let mut open = use_signal(|| false);

    let bell_class = if has_unread {
        "c-bell c-bell--unread"
    } else {
        "c-bell"
    };

    rsx! {
        li { class: "dropdown dropdown-notifications",
            button {
                class: "{bell_class}",
                aria_label: "Notifications",
                onclick: move |_| open.toggle(),
                "🔔"
            }

            if open() {
                div { class: "dropdown-menu c-bell__list",
                    if notifications.history.read().is_empty() {
                        span { class: "dropdown-item c-bell__empty", "Nothing new" }
                    }
                    for notification in notifications.history.read().iter().rev() {
                        span {
                            key: "{notification.id}",
                            class: "dropdown-item indicator-{notification.indicator.as_str()}",
                            "{notification.message}"
                        }
                    }
                    button {
                        class: "dropdown-item c-bell__clear",
                        onclick: move |_| notifications.clear_history(),
                        "Clear"
                    }
                }
            }
        }
    }
}
