use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
function fail(message) {
  throw new Error(message);
}

function workerScope() {
  if (typeof self === 'undefined' || !self.registration || !self.clients) {
    fail('service worker global scope unavailable');
  }
  return self;
}

function cacheStorage() {
  if (typeof caches === 'undefined') {
    fail('Cache API unavailable');
  }
  return caches;
}

async function windowClient(id) {
  const client = await workerScope().clients.get(id);
  if (!client) {
    fail(`client ${id} is no longer open`);
  }
  return client;
}

export async function jsCacheAddAll(cacheName, urls) {
  const cache = await cacheStorage().open(cacheName);
  await cache.addAll(urls);
}

export async function jsCacheNames() {
  return await cacheStorage().keys();
}

export async function jsCacheDelete(cacheName) {
  return await cacheStorage().delete(cacheName);
}

export async function jsShowNotification(title, options) {
  await workerScope().registration.showNotification(title, options);
}

export async function jsMatchWindowClients(includeUncontrolled) {
  const list = await workerScope().clients.matchAll({ type: 'window', includeUncontrolled });
  return list.map((client) => ({ id: client.id, url: client.url, focused: !!client.focused }));
}

export async function jsFocusClient(id) {
  const client = await windowClient(id);
  if (typeof client.focus !== 'function') {
    fail(`client ${id} is not a window`);
  }
  await client.focus();
}

export async function jsNavigateClient(id, url) {
  const client = await windowClient(id);
  if (typeof client.navigate !== 'function') {
    fail(`client ${id} is not a window`);
  }
  await client.navigate(url);
}

export async function jsOpenWindow(url) {
  await workerScope().clients.openWindow(url);
}

export async function jsClaimClients() {
  await workerScope().clients.claim();
}

export async function jsSkipWaiting() {
  await workerScope().skipWaiting();
}

export function jsScopeOrigin() {
  return workerScope().location.origin;
}

export function jsPeriodicSyncSupported() {
  return typeof self !== 'undefined' && !!self.registration && 'periodicSync' in self.registration;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsCacheAddAll)]
    fn js_cache_add_all(cache_name: &str, urls: Array) -> Promise;
    #[wasm_bindgen(js_name = jsCacheNames)]
    fn js_cache_names() -> Promise;
    #[wasm_bindgen(js_name = jsCacheDelete)]
    fn js_cache_delete(cache_name: &str) -> Promise;

    #[wasm_bindgen(js_name = jsShowNotification)]
    fn js_show_notification(title: &str, options: JsValue) -> Promise;

    #[wasm_bindgen(js_name = jsMatchWindowClients)]
    fn js_match_window_clients(include_uncontrolled: bool) -> Promise;
    #[wasm_bindgen(js_name = jsFocusClient)]
    fn js_focus_client(id: &str) -> Promise;
    #[wasm_bindgen(js_name = jsNavigateClient)]
    fn js_navigate_client(id: &str, url: &str) -> Promise;
    #[wasm_bindgen(js_name = jsOpenWindow)]
    fn js_open_window(url: &str) -> Promise;
    #[wasm_bindgen(js_name = jsClaimClients)]
    fn js_claim_clients() -> Promise;

    #[wasm_bindgen(js_name = jsSkipWaiting)]
    fn js_skip_waiting() -> Promise;
    #[wasm_bindgen(catch, js_name = jsScopeOrigin)]
    fn js_scope_origin() -> Result<String, JsValue>;
    #[wasm_bindgen(js_name = jsPeriodicSyncSupported)]
    fn js_periodic_sync_supported() -> bool;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

/// Renders a thrown JS value as text, preferring `Error.message`.
pub fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

async fn promise_to_json<T: DeserializeOwned>(promise: Promise) -> Result<T, String> {
    let value = await_promise(promise).await?;
    from_value(value).map_err(|e| e.to_string())
}

pub async fn cache_add_all(cache_name: &str, urls: &[String]) -> Result<(), String> {
    let urls = urls
        .iter()
        .map(|url| JsValue::from_str(url))
        .collect::<Array>();
    let _ = await_promise(js_cache_add_all(cache_name, urls)).await?;
    Ok(())
}

pub async fn cache_names() -> Result<Vec<String>, String> {
    promise_to_json(js_cache_names()).await
}

pub async fn cache_delete(cache_name: &str) -> Result<bool, String> {
    let value = await_promise(js_cache_delete(cache_name)).await?;
    Ok(value.as_bool().unwrap_or(false))
}

pub async fn show_notification(title: &str, options: &NotificationOptions) -> Result<(), String> {
    let options = options
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())?;
    let _ = await_promise(js_show_notification(title, options)).await?;
    Ok(())
}

pub async fn match_window_clients(include_uncontrolled: bool) -> Result<Vec<ClientWindow>, String> {
    promise_to_json(js_match_window_clients(include_uncontrolled)).await
}

pub async fn focus_client(client_id: &str) -> Result<(), String> {
    let _ = await_promise(js_focus_client(client_id)).await?;
    Ok(())
}

pub async fn navigate_client(client_id: &str, url: &str) -> Result<(), String> {
    let _ = await_promise(js_navigate_client(client_id, url)).await?;
    Ok(())
}

pub async fn open_window(url: &str) -> Result<(), String> {
    let _ = await_promise(js_open_window(url)).await?;
    Ok(())
}

pub async fn claim_clients() -> Result<(), String> {
    let _ = await_promise(js_claim_clients()).await?;
    Ok(())
}

pub async fn skip_waiting() -> Result<(), String> {
    let _ = await_promise(js_skip_waiting()).await?;
    Ok(())
}

pub fn scope_origin() -> Result<String, String> {
    js_scope_origin().map_err(js_error_to_string)
}

pub fn periodic_sync_supported() -> bool {
    js_periodic_sync_supported()
}
