//! Navbar logic independent of the renderer

pub mod actions;
pub mod controller;
pub mod custom_menus;
pub mod help_links;
pub mod menu;
pub mod resolver;
pub mod route;

pub use controller::{ShowOutcome, ToolbarController};
pub use custom_menus::{DropdownMenu, IconLink, MenuItem, MenuSlot, ToolbarAction, ToolbarMenus};
pub use help_links::{classify_help_click, classify_link_click, collect_help_links, HelpClick, HelpLinksView};
pub use menu::{build_menu, filter_pages, page_href, MenuEntry, WorkspaceIndex};
pub use resolver::{default_page, resolve_page};
pub use route::DeskRoute;
