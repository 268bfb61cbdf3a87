//! Structured logging for the desk toolbar
//!
//! Keeps field names consistent between the browser console and the server log.

use crate::domain::models::CurrentPage;

/// Operation tag attached to every toolbar log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PageResolution,
    MenuBuild,
    HelpLinks,
    ToolbarAction,
    SessionDefaults,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PageResolution => "page_resolution",
            LogOperation::MenuBuild => "menu_build",
            LogOperation::HelpLinks => "help_links",
            LogOperation::ToolbarAction => "toolbar_action",
            LogOperation::SessionDefaults => "session_defaults",
        }
    }
}

/// Log a freshly loaded page list
pub fn log_pages_loaded(total: usize, public: usize, has_access: bool) {
    tracing::info!(
        operation = LogOperation::MenuBuild.as_str(),
        page_count = total,
        public_count = public,
        has_access = has_access,
        "Workspace pages loaded"
    );
}

/// Log a display request made before the page list arrived
pub fn log_show_deferred(route: &str) {
    tracing::debug!(
        operation = LogOperation::PageResolution.as_str(),
        route = route,
        "Pages not loaded yet, display deferred"
    );
}

/// Log the outcome of page resolution
pub fn log_page_resolved(route: &str, page: &CurrentPage) {
    tracing::debug!(
        operation = LogOperation::PageResolution.as_str(),
        route = route,
        page = %page.name,
        section = page.section().as_str(),
        "Current page resolved"
    );
}

/// Log a stored preference that no longer matches any page
pub fn log_stale_preference(name: &str) {
    tracing::warn!(
        operation = LogOperation::PageResolution.as_str(),
        stored_page = name,
        "Stored page preference not found in workspace list"
    );
}

/// Log help links collected for a route
pub fn log_help_links(route: &str, count: usize) {
    tracing::trace!(
        operation = LogOperation::HelpLinks.as_str(),
        route = route,
        link_count = count,
        "Help links indexed"
    );
}

/// Log a toolbar action trigger
pub fn log_action(action: &str) {
    tracing::info!(
        operation = LogOperation::ToolbarAction.as_str(),
        action = action,
        "Toolbar action triggered"
    );
}

/// Log a failed toolbar action
pub fn log_action_error(action: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::ToolbarAction.as_str(),
        action = action,
        error = error,
        "Toolbar action failed"
    );
}

/// Log the result of saving session defaults
pub fn log_session_defaults_saved(field_count: usize, success: bool) {
    if success {
        tracing::info!(
            operation = LogOperation::SessionDefaults.as_str(),
            field_count = field_count,
            "Session defaults saved"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::SessionDefaults.as_str(),
            field_count = field_count,
            "Session defaults rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::PageResolution.as_str(), "page_resolution");
        assert_eq!(LogOperation::MenuBuild.as_str(), "menu_build");
        assert_eq!(LogOperation::HelpLinks.as_str(), "help_links");
        assert_eq!(LogOperation::ToolbarAction.as_str(), "toolbar_action");
        assert_eq!(LogOperation::SessionDefaults.as_str(), "session_defaults");
    }
}
