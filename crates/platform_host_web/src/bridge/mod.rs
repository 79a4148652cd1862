//! Service-worker capability bridge for `platform_host_web` service adapters.
//!
//! Calls are grouped by host domain (cache storage, notifications, clients, scope) and routed
//! through `interop`, which holds the wasm `inline_js` bindings and the non-wasm shim.

mod interop;

use platform_host::{ClientWindow, NotificationOptions};

#[cfg(target_arch = "wasm32")]
pub use interop::js_error_to_string;

pub async fn cache_add_all(cache_name: &str, urls: &[String]) -> Result<(), String> {
    interop::cache_add_all(cache_name, urls).await
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    interop::cache_names().await
}

pub async fn cache_delete(cache_name: &str) -> Result<bool, String> {
    interop::cache_delete(cache_name).await
}

pub async fn show_notification(title: &str, options: &NotificationOptions) -> Result<(), String> {
    interop::show_notification(title, options).await
}

pub async fn match_window_clients(include_uncontrolled: bool) -> Result<Vec<ClientWindow>, String> {
    interop::match_window_clients(include_uncontrolled).await
}

pub async fn focus_client(client_id: &str) -> Result<(), String> {
    interop::focus_client(client_id).await
}

pub async fn navigate_client(client_id: &str, url: &str) -> Result<(), String> {
    interop::navigate_client(client_id, url).await
}

pub async fn open_window(url: &str) -> Result<(), String> {
    interop::open_window(url).await
}

pub async fn claim_clients() -> Result<(), String> {
    interop::claim_clients().await
}

pub async fn skip_waiting() -> Result<(), String> {
    interop::skip_waiting().await
}

pub fn scope_origin() -> Result<String, String> {
    interop::scope_origin()
}

pub fn periodic_sync_supported() -> bool {
    interop::periodic_sync_supported()
}
