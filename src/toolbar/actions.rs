//! Stateless toolbar actions
//!
//! Browser side effects (reload, new tab, body class) live in the UI layer;
//! this module holds the decisions behind them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::models::{
    AppInfo, BootInfo, FieldType, Indicator, Notification, SessionDefaultField,
};
use crate::shared::constants::SESSION_DEFAULTS_SUCCESS;
use crate::shared::errors::{Result, ToolbarError};
use crate::shared::logging::{log_action, log_action_error, log_session_defaults_saved};
use crate::shared::storage::{self, KeyValueStore};
use crate::shared::utils::Throttle;
use crate::toolbar::route::DeskRoute;

/// Invert the stored full width flag and return the new value
pub fn toggle_full_width(store: &mut dyn KeyValueStore) -> Result<bool> {
    let enabled = !storage::load_full_width(store);
    storage::save_full_width(store, enabled)?;
    log_action("toggle_full_width");
    Ok(enabled)
}

/// Local half of a cache clear. `Err(Throttled)` inside the throttle window.
pub fn clear_cache(
    store: &mut dyn KeyValueStore,
    throttle: &mut Throttle,
    now: DateTime<Utc>,
) -> Result<usize> {
    if !throttle.try_fire(now) {
        return Err(ToolbarError::Throttled("clear_cache"));
    }
    log_action("clear_cache");
    storage::clear_local_cache(store)
}

/// Route segments of the current user's profile form
pub fn user_profile_route(boot: &BootInfo) -> DeskRoute {
    DeskRoute::new(["Form", "User", boot.user.as_str()])
}

/// Content of the about dialog
#[derive(Debug, Clone, PartialEq)]
pub struct AboutInfo {
    pub apps: Vec<AppInfo>,
}

pub fn about_info(boot: Option<&BootInfo>) -> Result<AboutInfo> {
    let boot = boot.ok_or_else(|| ToolbarError::About("session not loaded".to_string()))?;
    if boot.apps.is_empty() {
        return Err(ToolbarError::About("no installed apps reported".to_string()));
    }
    Ok(AboutInfo {
        apps: boot.apps.clone(),
    })
}

/// Show-about never fails: errors are logged and the dialog stays closed
pub fn show_about(boot: Option<&BootInfo>) -> Option<AboutInfo> {
    log_action("show_about");
    match about_info(boot) {
        Ok(info) => Some(info),
        Err(e) => {
            log_action_error("show_about", &e.to_string());
            None
        }
    }
}

pub const SESSION_DEFAULT_SETTINGS_FIELD: &str = "settings";

/// Prompt fields, plus a settings shortcut for users allowed to open it
pub fn session_default_prompt_fields(
    mut fields: Vec<SessionDefaultField>,
    boot: &BootInfo,
) -> Vec<SessionDefaultField> {
    if boot.can_open_session_default_settings() {
        fields.push(SessionDefaultField::new(
            SESSION_DEFAULT_SETTINGS_FIELD,
            FieldType::Button,
            "Settings",
        ));
    }
    fields
}

/// Values to send back: every input field present, unset ones as ""
pub fn fill_missing_values(
    fields: &[SessionDefaultField],
    mut values: HashMap<String, String>,
) -> HashMap<String, String> {
    for field in fields.iter().filter(|f| !f.is_button()) {
        values.entry(field.fieldname.clone()).or_default();
    }
    values.retain(|name, _| {
        fields
            .iter()
            .any(|f| !f.is_button() && &f.fieldname == name)
    });
    values
}

/// Initial prompt values taken from field defaults
pub fn initial_values(fields: &[SessionDefaultField]) -> HashMap<String, String> {
    fields
        .iter()
        .filter(|f| !f.is_button())
        .map(|f| (f.fieldname.clone(), f.default.clone().unwrap_or_default()))
        .collect()
}

/// Notification for the server reply; `true` when the cache must be cleared
pub fn session_defaults_outcome(message: &str, field_count: usize) -> (Notification, bool) {
    let success = message == SESSION_DEFAULTS_SUCCESS;
    log_session_defaults_saved(field_count, success);
    if success {
        (Notification::new("Session Defaults Saved", Indicator::Green), true)
    } else {
        (
            Notification::new(
                "An error occurred while setting Session Defaults",
                Indicator::Red,
            ),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SYSTEM_MANAGER_ROLE;
    use crate::shared::storage::MemoryStore;
    use chrono::Duration;

    fn fields() -> Vec<SessionDefaultField> {
        vec![
            SessionDefaultField::new("company", FieldType::Link, "Company").with_options("Company"),
            SessionDefaultField::new("currency", FieldType::Select, "Currency")
                .with_options("EUR\nUSD")
                .with_default("EUR"),
        ]
    }

    #[test]
    fn test_toggle_full_width_twice_restores_flag() {
        let mut store = MemoryStore::new();
        assert!(toggle_full_width(&mut store).unwrap());
        assert!(!toggle_full_width(&mut store).unwrap());
        assert!(!storage::load_full_width(&store));

        storage::save_full_width(&mut store, true).unwrap();
        toggle_full_width(&mut store).unwrap();
        toggle_full_width(&mut store).unwrap();
        assert!(storage::load_full_width(&store));
    }

    #[test]
    fn test_clear_cache_is_throttled() {
        let mut store = MemoryStore::new();
        store.set("_version", "15").unwrap();
        let mut throttle = Throttle::new(Duration::seconds(10));
        let now = Utc::now();

        assert_eq!(clear_cache(&mut store, &mut throttle, now).unwrap(), 1);
        assert!(matches!(
            clear_cache(&mut store, &mut throttle, now + Duration::seconds(1)),
            Err(ToolbarError::Throttled(_))
        ));
        assert_eq!(
            clear_cache(&mut store, &mut throttle, now + Duration::seconds(11)).unwrap(),
            0
        );
    }

    #[test]
    fn test_show_about_swallows_errors() {
        assert_eq!(show_about(None), None);
        assert_eq!(show_about(Some(&BootInfo::default())), None);

        let boot = BootInfo {
            apps: vec![AppInfo {
                name: "desk".into(),
                title: "Desk".into(),
                version: "1.0.0".into(),
            }],
            ..Default::default()
        };
        assert_eq!(show_about(Some(&boot)).map(|info| info.apps.len()), Some(1));
    }

    #[test]
    fn test_settings_button_only_for_permitted_users() {
        let mut boot = BootInfo {
            user: "jane@example.com".into(),
            ..Default::default()
        };
        assert_eq!(session_default_prompt_fields(fields(), &boot).len(), 2);

        boot.roles.push(SYSTEM_MANAGER_ROLE.to_string());
        let prompt = session_default_prompt_fields(fields(), &boot);
        assert_eq!(prompt.len(), 3);
        assert!(prompt[2].is_button());
    }

    #[test]
    fn test_fill_missing_values_blanks_unset_fields() {
        let mut prompt = fields();
        prompt.push(SessionDefaultField::new(
            SESSION_DEFAULT_SETTINGS_FIELD,
            FieldType::Button,
            "Settings",
        ));
        let mut values = HashMap::new();
        values.insert("currency".to_string(), "USD".to_string());

        let filled = fill_missing_values(&prompt, values);

        assert_eq!(filled.len(), 2);
        assert_eq!(filled["company"], "");
        assert_eq!(filled["currency"], "USD");
        assert!(!filled.contains_key(SESSION_DEFAULT_SETTINGS_FIELD));
    }

    #[test]
    fn test_initial_values_use_defaults() {
        let values = initial_values(&fields());
        assert_eq!(values["currency"], "EUR");
        assert_eq!(values["company"], "");
    }

    #[test]
    fn test_session_defaults_outcome() {
        let (note, clear) = session_defaults_outcome("success", 2);
        assert_eq!(note.indicator, Indicator::Green);
        assert!(clear);

        let (note, clear) = session_defaults_outcome("failed", 2);
        assert_eq!(note.indicator, Indicator::Red);
        assert!(!clear);
    }

    #[test]
    fn test_user_profile_route() {
        let boot = BootInfo {
            user: "jane@example.com".into(),
            ..Default::default()
        };
        assert_eq!(user_profile_route(&boot).as_route_str(), "Form/User/jane@example.com");
    }
}
