// Utility functions
// Slugs, throttling

pub mod slug;
pub mod throttle;

pub use slug::{slug, to_title_case, unslug};
pub use throttle::Throttle;
