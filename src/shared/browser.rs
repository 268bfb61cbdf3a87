//! Browser side effects of toolbar actions
//!
//! WASM-only bodies; every function is a no-op during server rendering.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::shared::constants::FULL_WIDTH_CLASS;
#[cfg(target_arch = "wasm32")]
use crate::shared::constants::{SEARCH_FOCUS_DELAY_MS, WEBSITE_PATH};

/// Add or remove the full width class on `<body>`
#[cfg(target_arch = "wasm32")]
pub fn apply_full_width_class(enabled: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        if let Err(e) = body.class_list().toggle_with_force(FULL_WIDTH_CLASS, enabled) {
            tracing::warn!("Failed to toggle {} class: {:?}", FULL_WIDTH_CLASS, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_full_width_class(enabled: bool) {
    tracing::trace!(class = FULL_WIDTH_CLASS, enabled, "Skipping body class outside the browser");
}

/// Hard reload of the current page
#[cfg(target_arch = "wasm32")]
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            tracing::error!("Reload failed: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() {}

/// Open `url` in a new tab without giving it access to this window
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener") {
            tracing::error!("Failed to open {}: {:?}", url, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(_url: &str) {}

/// Public site view in a new tab
#[cfg(target_arch = "wasm32")]
pub fn open_website() {
    open_in_new_tab(WEBSITE_PATH);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_website() {}

/// Focus an input once the modal holding it has been shown
#[cfg(target_arch = "wasm32")]
pub async fn focus_after_delay(element_id: &str) {
    gloo_timers::future::TimeoutFuture::new(SEARCH_FOCUS_DELAY_MS).await;
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn focus_after_delay(_element_id: &str) {}
