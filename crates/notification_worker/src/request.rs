//! Notification request model and the default-fill policy applied to every input.
//!
//! Inputs arrive as a push payload (JSON object or raw text) or as the payload of a
//! `SHOW_NOTIFICATION` message. Both are reduced to a [`NotificationRequestPatch`] and merged
//! over [`NotificationDefaults`] field by field: a field falls back to its default when it is
//! missing, `null`, of the wrong JSON type, or an empty string.

use platform_host::{NotificationAction, NotificationOptions};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::{NotificationDefaults, WorkerConfig};

/// Partial notification request as sent by a push server or a foreground page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequestPatch {
    /// Title override.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub title: Option<String>,
    /// Body override.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub body: Option<String>,
    /// Icon override.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub icon: Option<String>,
    /// Badge override.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub badge: Option<String>,
    /// Tag override.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub tag: Option<String>,
    /// `requireInteraction` override.
    #[serde(default, deserialize_with = "strict_bool")]
    pub require_interaction: Option<bool>,
    /// Data payload; object keys are merged over the default `url`/`timestamp`.
    #[serde(default)]
    pub data: Option<Value>,
}

fn non_empty_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(text) if !text.is_empty() => Some(text),
        _ => None,
    })
}

fn strict_bool<'de, D: Deserializer<'de>>(de: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(de)?.as_bool())
}

impl NotificationRequestPatch {
    /// Decodes a JSON object; any other JSON value yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Decodes push payload text.
    ///
    /// A JSON object becomes a patch and any other JSON value carries no fields. Text that is
    /// not JSON is used verbatim as the body; empty text leaves every field at its default.
    pub fn from_push_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_json(&value).unwrap_or_default(),
            Err(_) => Self {
                body: (!text.is_empty()).then(|| text.to_string()),
                ..Self::default()
            },
        }
    }
}

/// Payload attached to a displayed notification and returned with its click event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Click target.
    pub url: String,
    /// Unix milliseconds at which the request was built, unless the sender supplied one.
    pub timestamp: u64,
    /// Sender-supplied keys passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationData {
    fn merge(patch: Option<&Value>, defaults: &NotificationDefaults, now_ms: u64) -> Self {
        let mut extra = match patch {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        let url = match extra.remove("url") {
            Some(Value::String(url)) if !url.is_empty() => url,
            _ => defaults.url.clone(),
        };
        let timestamp = extra
            .remove("timestamp")
            .and_then(|ts| ts.as_u64().or_else(|| ts.as_f64().map(|ms| ms.max(0.0) as u64)))
            .unwrap_or(now_ms);
        Self {
            url,
            timestamp,
            extra,
        }
    }

    /// Reads the click target from a notification's raw data payload.
    pub fn target_url(data: &Value) -> Option<String> {
        data.get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }
}

/// Fully-resolved notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    /// Title.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Icon URL.
    pub icon: String,
    /// Badge URL.
    pub badge: String,
    /// Replacement key.
    pub tag: String,
    /// Whether the notification waits for user interaction.
    pub require_interaction: bool,
    /// Click payload.
    pub data: NotificationData,
    /// Action buttons, in display order.
    pub actions: Vec<NotificationAction>,
}

impl NotificationRequest {
    /// Merges `patch` over the configured defaults.
    pub fn with_defaults(patch: NotificationRequestPatch, config: &WorkerConfig, now_ms: u64) -> Self {
        let defaults = &config.defaults;
        Self {
            title: patch.title.unwrap_or_else(|| defaults.title.clone()),
            body: patch.body.unwrap_or_else(|| defaults.body.clone()),
            icon: patch.icon.unwrap_or_else(|| defaults.icon.clone()),
            badge: patch.badge.unwrap_or_else(|| defaults.badge.clone()),
            tag: patch.tag.unwrap_or_else(|| defaults.tag.clone()),
            require_interaction: patch
                .require_interaction
                .unwrap_or(defaults.require_interaction),
            data: NotificationData::merge(patch.data.as_ref(), defaults, now_ms),
            actions: config.actions.clone(),
        }
    }

    /// Builds a request from push payload text; `None` means the push carried no payload.
    pub fn from_push_payload(payload: Option<&str>, config: &WorkerConfig, now_ms: u64) -> Self {
        let patch = payload
            .map(NotificationRequestPatch::from_push_text)
            .unwrap_or_default();
        Self::with_defaults(patch, config, now_ms)
    }

    /// Converts to host display options with the given vibration pattern.
    pub fn to_options(&self, vibrate: &[u32]) -> NotificationOptions {
        NotificationOptions {
            body: self.body.clone(),
            icon: self.icon.clone(),
            badge: self.badge.clone(),
            tag: self.tag.clone(),
            require_interaction: self.require_interaction,
            vibrate: vibrate.to_vec(),
            data: serde_json::to_value(&self.data).unwrap_or(Value::Null),
            actions: self.actions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    const NOW: u64 = 1_700_000_000_000;

    fn config() -> WorkerConfig {
        WorkerConfig::default()
    }

    fn defaults_request() -> NotificationRequest {
        NotificationRequest {
            title: "Prayer Reminder".to_string(),
            body: "Time for your daily prayer session!".to_string(),
            icon: "/pwa-192x192.png".to_string(),
            badge: "/pwa-192x192.png".to_string(),
            tag: "prayer-notification".to_string(),
            require_interaction: false,
            data: NotificationData {
                url: "/".to_string(),
                timestamp: NOW,
                extra: Map::new(),
            },
            actions: config().actions,
        }
    }

    #[test]
    fn absent_payload_yields_defaults() {
        assert_eq!(
            NotificationRequest::from_push_payload(None, &config(), NOW),
            defaults_request()
        );
    }

    #[test]
    fn empty_object_yields_all_defaults() {
        assert_eq!(
            NotificationRequest::from_push_payload(Some("{}"), &config(), NOW),
            defaults_request()
        );
    }

    #[test]
    fn object_payload_overrides_field_by_field() {
        let payload = json!({
            "title": "Evening prayer",
            "tag": "evening",
            "requireInteraction": true,
            "data": { "url": "/sessions/5", "sessionId": 5 }
        })
        .to_string();

        let request = NotificationRequest::from_push_payload(Some(&payload), &config(), NOW);

        let mut expected = defaults_request();
        expected.title = "Evening prayer".to_string();
        expected.tag = "evening".to_string();
        expected.require_interaction = true;
        expected.data.url = "/sessions/5".to_string();
        expected.data.extra.insert("sessionId".to_string(), json!(5));
        assert_eq!(request, expected);
    }

    #[test]
    fn null_empty_and_mistyped_fields_fall_back_individually() {
        let payload = json!({
            "title": "",
            "body": null,
            "icon": 42,
            "requireInteraction": "yes",
            "data": { "url": "" }
        })
        .to_string();

        assert_eq!(
            NotificationRequest::from_push_payload(Some(&payload), &config(), NOW),
            defaults_request()
        );
    }

    #[test]
    fn unparsable_payload_becomes_body() {
        let request =
            NotificationRequest::from_push_payload(Some("Pray for the city"), &config(), NOW);
        let mut expected = defaults_request();
        expected.body = "Pray for the city".to_string();
        assert_eq!(request, expected);
    }

    #[test]
    fn non_object_json_yields_all_defaults() {
        for payload in [r#""hello""#, "42", "[1,2]", "null", "true"] {
            assert_eq!(
                NotificationRequest::from_push_payload(Some(payload), &config(), NOW),
                defaults_request(),
                "{payload}"
            );
        }
    }

    #[test]
    fn empty_raw_text_keeps_default_body() {
        assert_eq!(
            NotificationRequest::from_push_payload(Some(""), &config(), NOW),
            defaults_request()
        );
    }

    #[test]
    fn sender_timestamp_is_kept() {
        let patch = NotificationRequestPatch::from_json(&json!({
            "data": { "timestamp": 12.0 }
        }))
        .expect("object patch");
        let request = NotificationRequest::with_defaults(patch, &config(), NOW);
        assert_eq!(request.data.timestamp, 12);
        assert_eq!(request.data.url, "/");
    }

    #[test]
    fn options_carry_vibration_actions_and_flattened_data() {
        let mut request = defaults_request();
        request.data.extra.insert("k".to_string(), json!("v"));
        let options = request.to_options(&[200, 100, 200]);

        assert_eq!(options.vibrate, vec![200, 100, 200]);
        assert_eq!(options.actions.len(), 2);
        assert_eq!(options.actions[0].action, "open");
        assert_eq!(options.actions[1].action, "dismiss");
        assert_eq!(options.data, json!({ "url": "/", "timestamp": NOW, "k": "v" }));
    }

    #[test]
    fn target_url_requires_non_empty_string() {
        assert_eq!(
            NotificationData::target_url(&json!({ "url": "/a" })),
            Some("/a".to_string())
        );
        assert_eq!(NotificationData::target_url(&json!({ "url": "" })), None);
        assert_eq!(NotificationData::target_url(&Value::Null), None);
    }
}
