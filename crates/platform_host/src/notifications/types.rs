//! Notification display models shared by the worker and browser adapters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One action button attached to a displayed notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Stable action identifier reported back on click.
    pub action: String,
    /// Button label.
    pub title: String,
    /// Optional button icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NotificationAction {
    /// Creates an action without an icon.
    pub fn new(action: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            title: title.into(),
            icon: None,
        }
    }

    /// Attaches an icon URL.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Display options handed to the host notification surface.
///
/// Serializes to the camelCase shape of the platform `NotificationOptions` dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    /// Body text.
    pub body: String,
    /// Large icon URL.
    pub icon: String,
    /// Monochrome badge URL.
    pub badge: String,
    /// Replacement/dismissal key.
    pub tag: String,
    /// Whether the notification stays until the user interacts with it.
    pub require_interaction: bool,
    /// Vibration pattern in milliseconds.
    pub vibrate: Vec<u32>,
    /// Opaque payload returned with click events.
    pub data: Value,
    /// Ordered action buttons.
    pub actions: Vec<NotificationAction>,
}

/// Notification as recorded by [`crate::MemoryNotificationService`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShownNotification {
    /// Title passed to the host.
    pub title: String,
    /// Options passed to the host.
    pub options: NotificationOptions,
}
