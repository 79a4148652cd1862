//! Build-time web-app manifest and the worker configuration derived from it.

use notification_worker::WorkerConfig;
use serde_json::Value;

include!(concat!(env!("OUT_DIR"), "/pwa_manifest_generated.rs"));

/// Worker configuration for this build's cache version and precache list.
pub fn worker_config() -> WorkerConfig {
    WorkerConfig::new(
        CACHE_VERSION,
        PRECACHE_URLS.iter().map(|url| url.to_string()).collect(),
    )
}

/// Parsed web-app manifest.
pub fn web_app_manifest() -> Value {
    serde_json::from_str(WEB_APP_MANIFEST_JSON).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn manifest_declares_app_identity_and_icons() {
        let manifest = web_app_manifest();
        assert_eq!(manifest["name"], "Adullam Prayer");
        assert_eq!(manifest["display"], "standalone");
        assert_eq!(manifest["start_url"], "/");
        let icons = manifest["icons"].as_array().expect("icons");
        assert!(icons
            .iter()
            .any(|icon| icon["src"] == "/pwa-192x192.png" && icon["type"] == "image/png"));
    }

    #[test]
    fn worker_config_uses_build_cache_version() {
        let config = worker_config();
        assert_eq!(config.cache_version, CACHE_VERSION);
        assert_eq!(config.cache_version, "adullam-prayer-v1");
        assert_eq!(
            config.precache_urls,
            vec!["/".to_string(), "/pwa-192x192.png".to_string()]
        );
    }

    #[test]
    fn precached_icon_is_a_manifest_icon() {
        let manifest = web_app_manifest();
        let icons = manifest["icons"].as_array().expect("icons");
        for url in PRECACHE_URLS.iter().filter(|url| url.ends_with(".png")) {
            assert!(icons.iter().any(|icon| icon["src"] == *url), "{url}");
        }
    }
}
