pub mod errors;
pub mod constants;
pub mod logging;
pub mod storage;
pub mod utils;
pub mod browser;

// Available in fullstack mode (both client and server)
pub mod hooks;
