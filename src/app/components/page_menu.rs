use dioxus::prelude::*;

use crate::shared::hooks::use_toolbar;

/// Public workspace selector, rendered into the `custom-navbar` list
#[component]
pub fn PageMenu() -> Element {
    let toolbar = use_toolbar();

    let entries = {
        let controller = toolbar.controller.read();
        let route = toolbar.route.read();
        let store = toolbar.store.read();
        controller.menu(&route, &**store)
    };

    rsx! {
        ul { class: "nav navbar-nav custom-navbar",
            for entry in entries {
                li {
                    key: "{entry.href}",
                    class: if entry.active { "active" } else { "" },
                    a { href: "{entry.href}", "{entry.title}" }
                }
            }
        }
    }
}
