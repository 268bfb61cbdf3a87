//! Desk toolbar entry point
//!
//! Uses the dioxus::serve() pattern for dx serve compatibility.

use desk_toolbar::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use desk_toolbar::config::ServerConfig;
    use desk_toolbar::infrastructure::init_desk;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(user = %config.user, "Starting desk toolbar...");

    if let Err(e) = init_desk(&config) {
        tracing::error!("Failed to load desk data: {:#}. Falling back to the built-in seed.", e);
    }

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Desk toolbar initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
