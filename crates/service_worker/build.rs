use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WebAppManifest {
    name: String,
    short_name: String,
    description: String,
    theme_color: String,
    background_color: String,
    display: String,
    start_url: String,
    scope: String,
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkerSection {
    cache_version: String,
    precache_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PwaConfig {
    schema_version: u32,
    manifest: WebAppManifest,
    worker: WorkerSection,
}

fn validate(path: &str, config: &PwaConfig) {
    if config.schema_version != 1 {
        panic!(
            "pwa config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if config.worker.cache_version.trim().is_empty() {
        panic!("pwa config in {path} has an empty worker.cache_version");
    }
    if config.manifest.icons.is_empty() {
        panic!("pwa config in {path} declares no manifest icons");
    }
    if let Some(url) = config
        .worker
        .precache_urls
        .iter()
        .find(|url| !url.starts_with('/'))
    {
        panic!("precache url `{url}` in {path} must be root-relative");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("pwa.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    let display = path.display().to_string();

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {display}: {err}"));
    let config: PwaConfig =
        toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {display}: {err}"));
    validate(&display, &config);

    let json = serde_json::to_string_pretty(&config.manifest).expect("serialize web app manifest");
    let precache = config
        .worker
        .precache_urls
        .iter()
        .map(|url| format!("{url:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let generated = format!(
        "/// Build-time generated web-app manifest JSON.\n\
pub const WEB_APP_MANIFEST_JSON: &str = r##\"{json}\"##;\n\
/// Cache bucket retained by this build.\n\
pub const CACHE_VERSION: &str = {cache_version:?};\n\
/// Resources precached on install.\n\
pub const PRECACHE_URLS: &[&str] = &[{precache}];\n",
        cache_version = config.worker.cache_version,
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("pwa_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
