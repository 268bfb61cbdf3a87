use dioxus::prelude::*;

use crate::shared::hooks::{use_notifications, use_toolbar};
use crate::toolbar::{MenuItem, MenuSlot};

/// A named toolbar dropdown with its toggle button
#[component]
pub fn ToolbarDropdown(menu: &'static str, label: &'static str) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "dropdown-toggle c-dropdown__toggle",
            aria_haspopup: "true",
            onclick: move |_| open.toggle(),
            "{label}"
        }

        if open() {
            div { class: "dropdown-menu c-dropdown__menu",
                DropdownItems { menu, on_done: move |_| open.set(false) }
            }
        }
    }
}

/// Entries of a dropdown: custom entries, divider, then standard entries
#[component]
pub fn DropdownItems(menu: &'static str, on_done: EventHandler<()>) -> Element {
    let toolbar = use_toolbar();

    // None marks the divider
    let slots: Vec<Option<MenuItem>> = toolbar
        .menus
        .read()
        .get_menu(menu)
        .map(|dropdown| {
            dropdown
                .slots()
                .into_iter()
                .map(|slot| match slot {
                    MenuSlot::Custom(item) | MenuSlot::Standard(item) => Some(item.clone()),
                    MenuSlot::Divider => None,
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        for (i, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(item) => rsx! {
                    DropdownItem { key: "{i}", item, on_done }
                },
                None => rsx! {
                    div { key: "{i}", class: "dropdown-divider" }
                },
            }
        }
    }
}

#[component]
fn DropdownItem(item: MenuItem, on_done: EventHandler<()>) -> Element {
    let toolbar = use_toolbar();
    let notifications = use_notifications();
    let nav = navigator();

    let class = format!("dropdown-item navbar-{}", item.action.as_str().replace('_', "-"));
    let action = item.action.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                toolbar.dispatch(action.clone(), notifications, nav);
                on_done.call(());
            },
            if let Some(icon) = &item.icon {
                span { class: "dropdown-item__icon", "{icon}" }
            }
            "{item.label}"
        }
    }
}
