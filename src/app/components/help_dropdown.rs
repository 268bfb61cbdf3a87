//! Help dropdown: links registered for the current route plus the help menu

use dioxus::prelude::*;

use crate::app::components::DropdownItems;
use crate::app::layouts::keep_key_in_field;
use crate::domain::models::HelpLink;
use crate::shared::browser;
use crate::shared::hooks::use_toolbar;
use crate::toolbar::{classify_link_click, collect_help_links, HelpClick};

#[component]
pub fn HelpDropdown() -> Element {
    let toolbar = use_toolbar();
    let mut open = use_signal(|| false);
    let mut query = use_signal(String::new);

    let enabled = toolbar
        .boot
        .read()
        .as_ref()
        .is_some_and(|boot| boot.desk_settings.notifications);

    let view = use_memo(move || {
        let route = toolbar.route.read().as_route_str();
        match toolbar.boot.read().as_ref() {
            Some(boot) => collect_help_links(&route, &boot.help_links),
            None => Default::default(),
        }
    });

    if !enabled {
        return rsx! {};
    }

    let help_links_class = if view.read().visible {
        "c-help__links"
    } else {
        "c-help__links hide"
    };

    rsx! {
        li { class: "dropdown dropdown-help",
            button {
                class: "dropdown-toggle c-dropdown__toggle",
                aria_haspopup: "true",
                onclick: move |_| open.toggle(),
                "Help"
            }

            if open() {
                div { class: "dropdown-menu c-dropdown__menu",
                    input {
                        id: "input-help",
                        class: "dropdown-item c-help__input",
                        r#type: "text",
                        placeholder: "Search for help",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt| {
                            keep_key_in_field(&evt);
                            if evt.key() == Key::Enter {
                                query.set(String::new());
                            }
                        },
                    }

                    div { id: "help-links", class: "{help_links_class}",
                        for link in view.read().links.iter().cloned() {
                            HelpLinkItem { key: "{link.url}", link: link.clone() }
                        }
                        div { class: "dropdown-divider" }
                    }

                    DropdownItems { menu: "help", on_done: move |_| open.set(false) }
                }
            }
        }
    }
}

#[component]
fn HelpLinkItem(link: HelpLink) -> Element {
    let click = classify_link_click(&link);

    rsx! {
        a {
            class: "dropdown-item",
            href: "{link.url}",
            target: "_blank",
            "data-path": link.data_path.clone(),
            onclick: move |evt| match &click {
                HelpClick::OpenInNewTab(href) => {
                    evt.prevent_default();
                    browser::open_in_new_tab(href);
                }
                HelpClick::Suppress => evt.prevent_default(),
                HelpClick::Follow => {}
            },
            "{link.label}"
        }
    }
}
