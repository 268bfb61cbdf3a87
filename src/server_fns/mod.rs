//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::domain::models::{BootInfo, SessionDefaultField, SidebarItems};

/// Workspace pages visible to the session user
#[server]
pub async fn get_workspace_sidebar_items() -> Result<SidebarItems, ServerFnError> {
    use crate::infrastructure::{desk, SESSION};

    let desk = desk();
    let cache_key = format!("sidebar:{}", desk.boot.user);

    if let Some(cached) = SESSION.cached(&cache_key) {
        match serde_json::from_str::<SidebarItems>(&cached) {
            Ok(items) => return Ok(items),
            Err(e) => tracing::warn!("Dropping unreadable sidebar cache entry: {}", e),
        }
    }

    let items = desk.sidebar.clone();
    let encoded = serde_json::to_string(&items).map_err(|e| ServerFnError::new(e.to_string()))?;
    SESSION.set_cached(&cache_key, encoded);

    tracing::info!("get_workspace_sidebar_items: {} pages", items.pages.len());
    Ok(items)
}

/// Session user, roles, desk settings and help link table
#[server]
pub async fn get_boot_info() -> Result<BootInfo, ServerFnError> {
    use crate::infrastructure::desk;

    Ok(desk().boot.clone())
}

/// Clear the server side session cache; returns a status message
#[server]
pub async fn clear_session_cache() -> Result<String, ServerFnError> {
    use crate::infrastructure::SESSION;

    Ok(SESSION.clear_cache())
}

#[server]
pub async fn get_session_default_values() -> Result<Vec<SessionDefaultField>, ServerFnError> {
    use crate::infrastructure::SESSION;

    Ok(SESSION.default_fields())
}

/// Store session defaults. Replies "success", or the validation error text.
#[server]
pub async fn set_session_default_values(
    default_values: HashMap<String, String>,
) -> Result<String, ServerFnError> {
    use crate::infrastructure::SESSION;
    use crate::shared::constants::SESSION_DEFAULTS_SUCCESS;

    match SESSION.set_defaults(&default_values) {
        Ok(()) => Ok(SESSION_DEFAULTS_SUCCESS.to_string()),
        Err(e) => {
            tracing::warn!("set_session_default_values rejected: {}", e);
            Ok(e.to_string())
        }
    }
}
