use dioxus::prelude::*;

use crate::app::layouts::keep_key_in_field;
use crate::app::pages::Route;
use crate::shared::browser;
use crate::shared::hooks::use_toolbar;
use crate::toolbar::{filter_pages, page_href};

/// Workspace search opened from the navbar input or Ctrl+G
#[component]
pub fn SearchModal() -> Element {
    let toolbar = use_toolbar();
    let mut search_open = toolbar.search_open;
    let mut query = use_signal(String::new);

    use_effect(move || {
        if search_open() {
            spawn(async move {
                browser::focus_after_delay("modal-search").await;
            });
        }
    });

    if !search_open() {
        return rsx! {};
    }

    let results: Vec<(String, String)> = {
        let controller = toolbar.controller.read();
        match controller.pages() {
            Ok(pages) => filter_pages(pages, &query.read())
                .into_iter()
                .map(|page| (page.title.clone(), page_href(page)))
                .collect(),
            Err(_) => Vec::new(),
        }
    };

    let mut close = move || {
        query.set(String::new());
        search_open.set(false);
    };

    rsx! {
        div {
            id: "search-modal",
            class: "c-modal",
            onclick: move |_| close(),
            div {
                class: "c-modal__dialog",
                onclick: move |evt| evt.stop_propagation(),
                input {
                    id: "modal-search",
                    class: "c-modal__search",
                    r#type: "text",
                    placeholder: "Search workspaces",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeydown: move |evt| {
                        keep_key_in_field(&evt);
                        if evt.key() == Key::Escape {
                            close();
                        }
                    },
                }

                ul { class: "c-modal__results",
                    for (title, href) in results {
                        SearchResult { key: "{href}", title, href: href.clone(), on_select: move |_| close() }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResult(title: String, href: String, on_select: EventHandler<()>) -> Element {
    let nav = navigator();

    rsx! {
        li {
            button {
                class: "c-modal__result",
                onclick: move |_| {
                    match href.parse::<Route>() {
                        Ok(route) => {
                            nav.push(route);
                        }
                        Err(_) => tracing::warn!("Unroutable search result: {}", href),
                    }
                    on_select.call(());
                },
                "{title}"
            }
        }
    }
}
