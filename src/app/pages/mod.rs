pub mod routes;
pub mod workspace;

pub use routes::{App, Route};
pub use workspace::{FormPage, WorkspacePage};
