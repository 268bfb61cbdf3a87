use dioxus::prelude::*;

use crate::app::components::ToolbarDialogs;
use crate::app::layouts::{shortcut_for, Navbar, Shortcut};
use crate::app::pages::{FormPage, WorkspacePage};
use crate::shared::hooks::{use_notifications_provider, use_toolbar_provider};
use crate::shared::constants::WORKSPACES_ROUTE;
use crate::shared::utils::unslug;
use crate::toolbar::{DeskRoute, WorkspaceIndex};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DeskLayout)]
    // Desk landing: shows the resolved default workspace
    #[route("/")]
    Home {},

    #[route("/app/private/:slug")]
    PrivateWorkspace { slug: String },
    #[route("/app/:doctype/:name")]
    Form { doctype: String, name: String },
    #[route("/app/:slug")]
    Workspace { slug: String },
}

impl Route {
    /// Desk route segments for this URL; workspace slugs become page titles
    pub fn desk_route(&self, index: &WorkspaceIndex) -> DeskRoute {
        let title = |slug: &str| {
            index
                .title_for(slug)
                .map(str::to_string)
                .unwrap_or_else(|| unslug(slug))
        };

        match self {
            Route::Home {} => DeskRoute::new([WORKSPACES_ROUTE]),
            Route::Workspace { slug } => DeskRoute::workspace(&title(slug), true),
            Route::PrivateWorkspace { slug } => DeskRoute::workspace(&title(slug), false),
            Route::Form { doctype, name } => {
                DeskRoute::new(["Form".to_string(), unslug(doctype), name.clone()])
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Desk toolbar app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn DeskLayout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let notifications = use_notifications_provider();
    let toolbar = use_toolbar_provider();
    let nav = navigator();

    let on_keydown = move |evt: Event<KeyboardData>| {
        let modifiers = evt.modifiers();
        let key = evt.key().to_string();
        match shortcut_for(&key, modifiers.ctrl() || modifiers.meta()) {
            Some(Shortcut::Action(action)) => {
                evt.prevent_default();
                toolbar.dispatch(action, notifications, nav);
            }
            Some(Shortcut::OpenSearch) => {
                evt.prevent_default();
                let mut search_open = toolbar.search_open;
                search_open.set(true);
            }
            None => {}
        }
    };

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            tabindex: "-1",
            onkeydown: on_keydown,
            // Replaces the <header> placeholder of the desk template
            header { Navbar {} }

            main { class: "c-layout__main container",
                Outlet::<Route> {}
            }

            ToolbarDialogs {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { WorkspacePage {} }
}

#[component]
fn Workspace(slug: String) -> Element {
    let _ = slug;
    rsx! { WorkspacePage {} }
}

#[component]
fn PrivateWorkspace(slug: String) -> Element {
    let _ = slug;
    rsx! { WorkspacePage {} }
}

#[component]
fn Form(doctype: String, name: String) -> Element {
    rsx! { FormPage { doctype, name } }
}
