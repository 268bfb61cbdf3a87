// Browser storage keys
pub const CURRENT_PAGE_KEY: &str = "current_page";
pub const CURRENT_PAGE_PUBLIC_KEY: &str = "is_current_page_public";
pub const FULL_WIDTH_KEY: &str = "container_fullwidth";

/// Keys that survive a local cache clear
pub const PRESERVED_KEYS: [&str; 3] = [CURRENT_PAGE_KEY, CURRENT_PAGE_PUBLIC_KEY, FULL_WIDTH_KEY];

/// Page shown when nothing else can be resolved
pub const DEFAULT_PAGE: &str = "Build";

/// First route segment of workspace pages
pub const WORKSPACES_ROUTE: &str = "Workspaces";
pub const PRIVATE_SEGMENT: &str = "private";

/// Body class applied in full width mode
pub const FULL_WIDTH_CLASS: &str = "full-width";

pub const WEBSITE_PATH: &str = "/index";

/// Minimum interval between two cache clears
pub const CLEAR_CACHE_THROTTLE_SECS: i64 = 10;

/// Lifetime of a transient notification
pub const NOTIFICATION_LIFETIME_MS: u32 = 7_000;
/// Entries kept under the bell
pub const NOTIFICATION_HISTORY_LIMIT: usize = 50;

/// Delay before focusing the search input once the modal is shown
pub const SEARCH_FOCUS_DELAY_MS: u32 = 300;

pub const SESSION_DEFAULTS_SUCCESS: &str = "success";
