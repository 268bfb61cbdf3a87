// Server-side stores backing the server functions
pub mod desk_store;
pub mod session_store;

pub use desk_store::{desk, init_desk, DeskData};
pub use session_store::{SessionStore, SessionStoreError, SESSION};
