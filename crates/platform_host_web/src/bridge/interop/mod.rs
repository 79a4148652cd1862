//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge domain functions.

use platform_host::{ClientWindow, NotificationOptions};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

#[cfg(target_arch = "wasm32")]
pub use wasm::js_error_to_string;

pub async fn cache_add_all(cache_name: &str, urls: &[String]) -> Result<(), String> {
    imp::cache_add_all(cache_name, urls).await
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    imp::cache_names().await
}

pub async fn cache_delete(cache_name: &str) -> Result<bool, String> {
    imp::cache_delete(cache_name).await
}

pub async fn show_notification(title: &str, options: &NotificationOptions) -> Result<(), String> {
    imp::show_notification(title, options).await
}

pub async fn match_window_clients(include_uncontrolled: bool) -> Result<Vec<ClientWindow>, String> {
    imp::match_window_clients(include_uncontrolled).await
}

pub async fn focus_client(client_id: &str) -> Result<(), String> {
    imp::focus_client(client_id).await
}

pub async fn navigate_client(client_id: &str, url: &str) -> Result<(), String> {
    imp::navigate_client(client_id, url).await
}

pub async fn open_window(url: &str) -> Result<(), String> {
    imp::open_window(url).await
}

pub async fn claim_clients() -> Result<(), String> {
    imp::claim_clients().await
}

pub async fn skip_waiting() -> Result<(), String> {
    imp::skip_waiting().await
}

pub fn scope_origin() -> Result<String, String> {
    imp::scope_origin()
}

pub fn periodic_sync_supported() -> bool {
    imp::periodic_sync_supported()
}
