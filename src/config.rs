//! Server configuration
//!
//! Every flag has an environment fallback so `dx serve` can run without
//! arguments.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use crate::domain::models::{DeskSettings, HelpLinkRegistry, SidebarItems};

#[derive(Debug, Clone, Parser)]
#[command(name = "desk-toolbar", about = "Desk toolbar server")]
pub struct ServerConfig {
    /// JSON file with the workspace sidebar items
    #[arg(long, env = "DESK_WORKSPACES")]
    pub workspaces: Option<PathBuf>,

    /// JSON file mapping route prefixes to help links
    #[arg(long, env = "DESK_HELP_LINKS")]
    pub help_links: Option<PathBuf>,

    /// Session user
    #[arg(long, env = "DESK_USER", default_value = "Administrator")]
    pub user: String,

    /// Comma separated roles of the session user
    #[arg(long, env = "DESK_ROLES", value_delimiter = ',', default_value = "System Manager")]
    pub roles: Vec<String>,

    /// Whether the user may edit public workspaces
    #[arg(long, env = "DESK_HAS_ACCESS", default_value_t = true, action = ArgAction::Set)]
    pub has_access: bool,

    #[arg(long, env = "DESK_NO_NOTIFICATIONS")]
    pub no_notifications: bool,

    #[arg(long, env = "DESK_NO_SEARCH_BAR")]
    pub no_search_bar: bool,
}

impl ServerConfig {
    /// Parse process arguments, falling back to env/defaults when the
    /// launcher passes flags we do not know.
    pub fn from_env() -> Self {
        match Self::try_parse() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring command line arguments: {}", e);
                Self::parse_from(["desk-toolbar"])
            }
        }
    }

    pub fn desk_settings(&self) -> DeskSettings {
        DeskSettings {
            notifications: !self.no_notifications,
            search_bar: !self.no_search_bar,
        }
    }

    /// Sidebar items from `--workspaces`, `None` when unset
    pub fn load_sidebar_items(&self) -> anyhow::Result<Option<SidebarItems>> {
        let Some(path) = &self.workspaces else {
            return Ok(None);
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading workspaces from {}", path.display()))?;
        let items = serde_json::from_str(&raw)
            .with_context(|| format!("parsing workspaces from {}", path.display()))?;
        Ok(Some(items))
    }

    /// Help link table from `--help-links`, `None` when unset
    pub fn load_help_links(&self) -> anyhow::Result<Option<HelpLinkRegistry>> {
        let Some(path) = &self.help_links else {
            return Ok(None);
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading help links from {}", path.display()))?;
        let registry = serde_json::from_str(&raw)
            .with_context(|| format!("parsing help links from {}", path.display()))?;
        Ok(Some(registry))
    }
}
