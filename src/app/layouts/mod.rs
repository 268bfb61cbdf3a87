pub mod navbar;

pub use navbar::{field_keeps_key, keep_key_in_field, shortcut_for, Navbar, Shortcut};
