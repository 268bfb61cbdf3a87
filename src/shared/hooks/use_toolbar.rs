//! Toolbar context shared by the navbar and its dropdowns

use chrono::{Duration, Utc};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::pages::Route;
use crate::domain::models::{BootInfo, Indicator, SessionDefaultField, SidebarItems};
use crate::server_fns::{clear_session_cache, get_session_default_values};
use crate::shared::browser;
use crate::shared::constants::CLEAR_CACHE_THROTTLE_SECS;
use crate::shared::errors::ToolbarError;
use crate::shared::hooks::Notifications;
use crate::shared::logging::{log_action, log_action_error};
use crate::shared::storage::{self, KeyValueStore};
use crate::shared::utils::{slug, Throttle};
use crate::toolbar::actions::{self, AboutInfo};
use crate::toolbar::{DeskRoute, ShowOutcome, ToolbarAction, ToolbarController, ToolbarMenus};

/// Modal currently opened from the toolbar
#[derive(Clone, Debug, PartialEq)]
pub enum ToolbarDialog {
    About(AboutInfo),
    Shortcuts,
    SessionDefaults(Vec<SessionDefaultField>),
}

#[derive(Clone, Copy)]
pub struct ToolbarContext {
    pub controller: Signal<ToolbarController>,
    pub store: Signal<Box<dyn KeyValueStore>>,
    pub boot: Signal<Option<BootInfo>>,
    pub menus: Signal<ToolbarMenus>,
    pub route: Signal<DeskRoute>,
    /// Title of the page resolved for the current route
    pub page_title: Signal<Option<String>>,
    pub full_width: Signal<bool>,
    pub dialog: Signal<Option<ToolbarDialog>>,
    pub search_open: Signal<bool>,
    clear_cache_throttle: Signal<Throttle>,
}

impl ToolbarContext {
    /// Install the fetched pages and boot data
    pub fn install(mut self, items: SidebarItems, boot: BootInfo) {
        self.boot.set(Some(boot));

        let mut store = self.store.write();
        let result = self.controller.write().load(items, &mut **store);
        match result {
            Ok(Some(page)) => self.page_title.set(Some(page.name)),
            Ok(None) => {}
            Err(e) => log_action_error("load_pages", &e.to_string()),
        }
    }

    /// Route changed: drop custom menu entries and resolve the page to show
    pub fn on_page_change(mut self, route: &Route) {
        self.menus.write().clear_custom();

        let desk_route = route.desk_route(self.controller.peek().index());
        self.route.set(desk_route.clone());

        let mut store = self.store.write();
        let outcome = self.controller.write().show(&desk_route, &mut **store);
        match outcome {
            Ok(ShowOutcome::Shown(page)) => self.page_title.set(Some(page.name)),
            Ok(ShowOutcome::Deferred) => {}
            Err(e) => log_action_error("show_page", &e.to_string()),
        }
    }

    /// Apply the stored full width flag, used once on mount
    pub fn set_fullwidth_if_enabled(mut self) {
        let enabled = storage::load_full_width(&**self.store.peek());
        self.full_width.set(enabled);
        browser::apply_full_width_class(enabled);
    }

    /// Run a toolbar action
    pub fn dispatch(mut self, action: ToolbarAction, notifications: Notifications, nav: Navigator) {
        match action {
            ToolbarAction::ClearCache => self.clear_cache(notifications),
            ToolbarAction::ToggleFullWidth => {
                let mut store = self.store.write();
                match actions::toggle_full_width(&mut **store) {
                    Ok(enabled) => {
                        self.full_width.set(enabled);
                        browser::apply_full_width_class(enabled);
                    }
                    Err(e) => log_action_error(action.as_str(), &e.to_string()),
                }
            }
            ToolbarAction::ShowAbout => {
                if let Some(info) = actions::show_about(self.boot.peek().as_ref()) {
                    self.dialog.set(Some(ToolbarDialog::About(info)));
                }
            }
            ToolbarAction::ShowShortcuts => {
                log_action(action.as_str());
                self.dialog.set(Some(ToolbarDialog::Shortcuts));
            }
            ToolbarAction::RouteToUser => {
                log_action(action.as_str());
                let target = self.boot.peek().as_ref().map(actions::user_profile_route);
                if let Some(target) = target {
                    if let (Some(doctype), Some(name)) = (target.segment(1), target.segment(2)) {
                        nav.push(Route::Form {
                            doctype: slug(doctype),
                            name: name.to_string(),
                        });
                    }
                }
            }
            ToolbarAction::ViewWebsite => {
                log_action(action.as_str());
                browser::open_website();
            }
            ToolbarAction::SessionDefaults => self.open_session_defaults(),
            ToolbarAction::Navigate(path) => match path.parse::<Route>() {
                Ok(route) => {
                    nav.push(route);
                }
                Err(_) => tracing::warn!("Unknown toolbar route: {}", path),
            },
        }
    }

    /// Clear local and server caches, then reload
    pub fn clear_cache(mut self, notifications: Notifications) {
        let result = {
            let mut store = self.store.write();
            let mut throttle = self.clear_cache_throttle.write();
            actions::clear_cache(&mut **store, &mut throttle, Utc::now())
        };

        match result {
            Ok(_) => {
                // outlives the menu entry that triggered it
                spawn_forever(async move {
                    match clear_session_cache().await {
                        Ok(message) => {
                            notifications.show_alert(message, Indicator::Info);
                            browser::reload_page();
                        }
                        Err(e) => log_action_error(
                            "clear_cache",
                            &ToolbarError::Remote(e.to_string()).to_string(),
                        ),
                    }
                });
            }
            Err(ToolbarError::Throttled(_)) => tracing::debug!("clear_cache throttled"),
            Err(e) => log_action_error("clear_cache", &e.to_string()),
        }
    }

    fn open_session_defaults(mut self) {
        log_action("session_defaults");
        spawn_forever(async move {
            match get_session_default_values().await {
                Ok(fields) => {
                    let boot = self.boot.peek().as_ref().cloned().unwrap_or_default();
                    let fields = actions::session_default_prompt_fields(fields, &boot);
                    self.dialog.set(Some(ToolbarDialog::SessionDefaults(fields)));
                }
                Err(e) => log_action_error(
                    "session_defaults",
                    &ToolbarError::Remote(e.to_string()).to_string(),
                ),
            }
        });
    }

    pub fn close_dialog(mut self) {
        self.dialog.set(None);
    }
}

/// Create the toolbar context; call once in the navbar
pub fn use_toolbar_provider() -> ToolbarContext {
    let controller = use_signal(ToolbarController::new);
    let store = use_signal(storage::platform_store);
    let boot = use_signal(|| None::<BootInfo>);
    let menus = use_signal(ToolbarMenus::with_defaults);
    let route = use_signal(DeskRoute::default);
    let page_title = use_signal(|| None::<String>);
    let full_width = use_signal(|| false);
    let dialog = use_signal(|| None::<ToolbarDialog>);
    let search_open = use_signal(|| false);
    let clear_cache_throttle =
        use_signal(|| Throttle::new(Duration::seconds(CLEAR_CACHE_THROTTLE_SECS)));

    use_context_provider(|| ToolbarContext {
        controller,
        store,
        boot,
        menus,
        route,
        page_title,
        full_width,
        dialog,
        search_open,
        clear_cache_throttle,
    })
}

/// Toolbar context created by [`use_toolbar_provider`]
pub fn use_toolbar() -> ToolbarContext {
    use_context::<ToolbarContext>()
}
