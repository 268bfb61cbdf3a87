//! Workspace pages and boot data served to the toolbar
//!
//! Loaded once at startup from configuration, seeded with a small built-in
//! desk when no files are given.

use once_cell::sync::OnceCell;

use crate::config::ServerConfig;
use crate::domain::models::{
    AppInfo, BootInfo, HelpLink, HelpLinkRegistry, PageDescriptor, SidebarItems,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DeskData {
    pub sidebar: SidebarItems,
    pub boot: BootInfo,
}

/// Global desk data (singleton)
static DESK: OnceCell<DeskData> = OnceCell::new();

/// Build desk data from configuration
pub fn load_desk(config: &ServerConfig) -> anyhow::Result<DeskData> {
    let mut sidebar = config.load_sidebar_items()?.unwrap_or_else(|| SidebarItems {
        pages: seed_pages(),
        has_access: true,
    });
    sidebar.has_access = sidebar.has_access && config.has_access;

    let help_links = config.load_help_links()?.unwrap_or_else(seed_help_links);

    let boot = BootInfo {
        user: config.user.clone(),
        roles: config.roles.clone(),
        can_read_session_defaults: config.has_access,
        desk_settings: config.desk_settings(),
        help_links,
        apps: installed_apps(),
    };

    tracing::info!(
        page_count = sidebar.pages.len(),
        user = %boot.user,
        "Desk data loaded"
    );

    Ok(DeskData { sidebar, boot })
}

/// Initialize the global desk data. Should be called once at startup.
pub fn init_desk(config: &ServerConfig) -> anyhow::Result<&'static DeskData> {
    if let Some(desk) = DESK.get() {
        return Ok(desk);
    }
    let desk = load_desk(config)?;
    Ok(DESK.get_or_init(|| desk))
}

/// Global desk data, seeded from defaults when startup did not initialize it
pub fn desk() -> &'static DeskData {
    DESK.get_or_init(|| DeskData {
        sidebar: SidebarItems {
            pages: seed_pages(),
            has_access: true,
        },
        boot: BootInfo {
            user: "Administrator".to_string(),
            roles: vec![crate::domain::models::SYSTEM_MANAGER_ROLE.to_string()],
            can_read_session_defaults: true,
            help_links: seed_help_links(),
            apps: installed_apps(),
            ..Default::default()
        },
    })
}

fn installed_apps() -> Vec<AppInfo> {
    vec![AppInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        title: "Desk Toolbar".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }]
}

pub fn seed_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new("Build", "Build", true),
        PageDescriptor::new("Selling", "Selling", true),
        PageDescriptor::new("Stock", "Stock", true),
        PageDescriptor::new("Accounting", "Accounting", true),
        PageDescriptor::new("My Notes", "My Notes", false),
    ]
}

pub fn seed_help_links() -> HelpLinkRegistry {
    let mut registry = HelpLinkRegistry::new();
    registry.register(
        "Workspaces",
        [HelpLink::new("https://docs.example.com/desk", "Desk Basics")],
    );
    registry.register(
        "Form",
        [HelpLink::new("https://docs.example.com/desk/form-view", "Form View")],
    );
    registry.register(
        "Form/User",
        [
            HelpLink::new("https://docs.example.com/desk/users", "Users"),
            HelpLink::new("https://docs.example.com/desk/roles", "Roles and Permissions"),
        ],
    );
    registry
}
