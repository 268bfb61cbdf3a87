use dioxus::prelude::*;

use crate::shared::hooks::use_toolbar;
use crate::shared::utils::unslug;

/// Body of a workspace route: the page the toolbar resolved
#[component]
pub fn WorkspacePage() -> Element {
    let toolbar = use_toolbar();
    let title = toolbar.page_title.read().clone();
    let section = toolbar
        .controller
        .read()
        .current_page()
        .map(|page| page.section().as_str())
        .unwrap_or_default();

    rsx! {
        div { class: "c-workspace",
            match title {
                Some(title) => rsx! {
                    h1 { class: "c-workspace__title", "{title}" }
                    span { class: "c-workspace__section", "{section}" }
                },
                None => rsx! {
                    p { class: "c-workspace__loading", "Loading workspace..." }
                },
            }
        }
    }
}

#[component]
pub fn FormPage(doctype: String, name: String) -> Element {
    let doctype = unslug(&doctype);

    rsx! {
        div { class: "c-form",
            h1 { class: "c-form__title", "{name}" }
            span { class: "c-form__doctype", "{doctype}" }
        }
    }
}
