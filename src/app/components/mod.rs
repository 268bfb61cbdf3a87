pub mod dialogs;
pub mod help_dropdown;
pub mod notification_area;
pub mod page_menu;
pub mod search_modal;
pub mod toolbar_dropdown;

pub use dialogs::{SessionDefaultsDialog, ToolbarDialogs};
pub use help_dropdown::HelpDropdown;
pub use notification_area::NotificationArea;
pub use page_menu::PageMenu;
pub use search_modal::SearchModal;
pub use toolbar_dropdown::{DropdownItems, ToolbarDropdown};
