// Domain models
// Pure Rust, no framework dependencies

pub mod page;
pub mod help;
pub mod session_defaults;
pub mod boot;
pub mod notification;

pub use page::{CurrentPage, PageDescriptor, Section, SidebarItems};
pub use help::{HelpLink, HelpLinkRegistry};
pub use session_defaults::{FieldType, SessionDefaultField};
pub use boot::{AppInfo, BootInfo, DeskSettings, SYSTEM_MANAGER_ROLE};
pub use notification::{Indicator, Notification};
