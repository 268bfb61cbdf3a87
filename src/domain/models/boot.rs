use serde::{Deserialize, Serialize};

use super::help::HelpLinkRegistry;

/// Role that may always open the session default settings
pub const SYSTEM_MANAGER_ROLE: &str = "System Manager";

/// Feature switches of the desk toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSettings {
    pub notifications: bool,
    pub search_bar: bool,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            search_bar: true,
        }
    }
}

/// Installed application shown in the about dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub title: String,
    pub version: String,
}

/// Session data the toolbar needs at startup
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BootInfo {
    pub user: String,
    pub roles: Vec<String>,
    /// Read permission on the session default settings document
    pub can_read_session_defaults: bool,
    pub desk_settings: DeskSettings,
    pub help_links: HelpLinkRegistry,
    pub apps: Vec<AppInfo>,
}

impl BootInfo {
    pub fn is_guest(&self) -> bool {
        self.user.is_empty() || self.user == "Guest"
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Whether the session defaults prompt gets a "Settings" shortcut
    pub fn can_open_session_default_settings(&self) -> bool {
        self.has_role(SYSTEM_MANAGER_ROLE) || self.can_read_session_defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_detection() {
        let boot = BootInfo {
            user: "Guest".to_string(),
            ..Default::default()
        };
        assert!(boot.is_guest());
        assert!(BootInfo::default().is_guest());
    }

    #[test]
    fn test_settings_access_by_role_or_permission() {
        let mut boot = BootInfo {
            user: "jane@example.com".to_string(),
            ..Default::default()
        };
        assert!(!boot.can_open_session_default_settings());

        boot.can_read_session_defaults = true;
        assert!(boot.can_open_session_default_settings());

        boot.can_read_session_defaults = false;
        boot.roles.push(SYSTEM_MANAGER_ROLE.to_string());
        assert!(boot.can_open_session_default_settings());
    }
}
