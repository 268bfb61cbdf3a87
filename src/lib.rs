// Shared between client and server
pub mod domain;
pub mod shared;
pub mod toolbar;

// Rendered on both sides in fullstack mode
pub mod app;

// Server functions (callable from the client, bodies run on the server)
pub mod server_fns;

// Server-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod infrastructure;
