use super::*;

fn unsupported() -> String {
    "Service worker APIs are only available when compiled for wasm32".to_string()
}

pub async fn cache_add_all(_cache_name: &str, _urls: &[String]) -> Result<(), String> {
    Ok(())
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    Ok(Vec::new())
}

pub async fn cache_delete(_cache_name: &str) -> Result<bool, String> {
    Ok(false)
}

pub async fn show_notification(_title: &str, _options: &NotificationOptions) -> Result<(), String> {
    Ok(())
}

pub async fn match_window_clients(
    _include_uncontrolled: bool,
) -> Result<Vec<ClientWindow>, String> {
    Ok(Vec::new())
}

pub async fn focus_client(_client_id: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn navigate_client(_client_id: &str, _url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn open_window(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub async fn claim_clients() -> Result<(), String> {
    Ok(())
}

pub async fn skip_waiting() -> Result<(), String> {
    Ok(())
}

pub fn scope_origin() -> Result<String, String> {
    Err(unsupported())
}

pub fn periodic_sync_supported() -> bool {
    false
}
