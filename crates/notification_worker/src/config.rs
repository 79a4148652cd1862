//! Worker configuration passed explicitly into every handler.

use platform_host::NotificationAction;

/// Cache bucket name retained by this worker version unless the build overrides it.
pub const DEFAULT_CACHE_VERSION: &str = "adullam-prayer-v1";
/// Static application icon, precached and used as notification icon and badge.
pub const APP_ICON_URL: &str = "/pwa-192x192.png";
/// Action id that opens or focuses the application.
pub const OPEN_ACTION: &str = "open";
/// Action id that only closes the notification.
pub const DISMISS_ACTION: &str = "dismiss";
/// Tag of the one-shot background sync that triggers a reminder check.
pub const SYNC_TAG: &str = "prayer-check";
/// Tag of the periodic background sync that triggers a reminder check.
pub const PERIODIC_SYNC_TAG: &str = "prayer-reminder-check";

/// Field values used wherever a notification request leaves a field unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDefaults {
    /// Default title.
    pub title: String,
    /// Default body.
    pub body: String,
    /// Default icon URL.
    pub icon: String,
    /// Default badge URL.
    pub badge: String,
    /// Default tag; requests sharing it replace each other.
    pub tag: String,
    /// Default click target.
    pub url: String,
    /// Default `requireInteraction` flag.
    pub require_interaction: bool,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            title: "Prayer Reminder".to_string(),
            body: "Time for your daily prayer session!".to_string(),
            icon: APP_ICON_URL.to_string(),
            badge: APP_ICON_URL.to_string(),
            tag: "prayer-notification".to_string(),
            url: "/".to_string(),
            require_interaction: false,
        }
    }
}

/// Runtime configuration of the notification worker.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerConfig {
    /// Name of the one cache bucket kept on activation.
    pub cache_version: String,
    /// Resources stored into the current bucket on install.
    pub precache_urls: Vec<String>,
    /// Notification field defaults.
    pub defaults: NotificationDefaults,
    /// Vibration pattern attached to every notification.
    pub vibration_pattern: Vec<u32>,
    /// Action buttons attached to every notification.
    pub actions: Vec<NotificationAction>,
    /// Accepted `sync` tag.
    pub sync_tag: String,
    /// Accepted `periodicsync` tag.
    pub periodic_sync_tag: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_version: DEFAULT_CACHE_VERSION.to_string(),
            precache_urls: vec!["/".to_string(), APP_ICON_URL.to_string()],
            defaults: NotificationDefaults::default(),
            vibration_pattern: vec![200, 100, 200],
            actions: vec![
                NotificationAction::new(OPEN_ACTION, "Open App").with_icon(APP_ICON_URL),
                NotificationAction::new(DISMISS_ACTION, "Dismiss"),
            ],
            sync_tag: SYNC_TAG.to_string(),
            periodic_sync_tag: PERIODIC_SYNC_TAG.to_string(),
        }
    }
}

impl WorkerConfig {
    /// Default configuration with a build-provided cache version and precache list.
    pub fn new(cache_version: impl Into<String>, precache_urls: Vec<String>) -> Self {
        Self {
            cache_version: cache_version.into(),
            precache_urls,
            ..Self::default()
        }
    }
}
