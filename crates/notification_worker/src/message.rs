//! Control messages posted by foreground pages, decoded once at the boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::request::NotificationRequestPatch;

/// Message kinds accepted from foreground contexts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ControlMessage {
    /// Show a notification built from `payload` and acknowledge on the reply port.
    #[serde(rename = "SHOW_NOTIFICATION")]
    ShowNotification {
        /// Partial request; a missing or non-object payload shows the defaults.
        #[serde(default, deserialize_with = "lenient_patch")]
        payload: NotificationRequestPatch,
    },
    /// Activate this worker version immediately.
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
    /// Take control of every open window.
    #[serde(rename = "CLIENTS_CLAIM")]
    ClientsClaim,
}

fn lenient_patch<'de, D: Deserializer<'de>>(de: D) -> Result<NotificationRequestPatch, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(NotificationRequestPatch::from_json(&value).unwrap_or_default())
}

impl ControlMessage {
    /// Decodes message data; unknown or malformed messages yield `None`.
    pub fn decode(data: &Value) -> Option<Self> {
        if !data.is_object() {
            return None;
        }
        serde_json::from_value(data.clone()).ok()
    }
}

/// Reply posted once a requested notification has been shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    /// Always `true`; failures produce no reply.
    pub success: bool,
}

impl Acknowledgement {
    /// Successful acknowledgement.
    pub const fn success() -> Self {
        Self { success: true }
    }

    /// JSON form posted to the reply port.
    pub fn to_json(self) -> Value {
        serde_json::json!({ "success": self.success })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_show_notification_with_payload() {
        let message = ControlMessage::decode(&json!({
            "type": "SHOW_NOTIFICATION",
            "payload": { "title": "T", "body": "B" }
        }));
        assert_eq!(
            message,
            Some(ControlMessage::ShowNotification {
                payload: NotificationRequestPatch {
                    title: Some("T".to_string()),
                    body: Some("B".to_string()),
                    ..NotificationRequestPatch::default()
                }
            })
        );
    }

    #[test]
    fn decodes_show_notification_without_payload() {
        assert_eq!(
            ControlMessage::decode(&json!({ "type": "SHOW_NOTIFICATION" })),
            Some(ControlMessage::ShowNotification {
                payload: NotificationRequestPatch::default()
            })
        );
    }

    #[test]
    fn non_object_payload_still_decodes_as_show_notification() {
        for payload in [json!("hello"), json!(42), json!([1, 2]), Value::Null] {
            assert_eq!(
                ControlMessage::decode(&json!({ "type": "SHOW_NOTIFICATION", "payload": payload })),
                Some(ControlMessage::ShowNotification {
                    payload: NotificationRequestPatch::default()
                })
            );
        }
    }

    #[test]
    fn decodes_lifecycle_requests() {
        assert_eq!(
            ControlMessage::decode(&json!({ "type": "SKIP_WAITING" })),
            Some(ControlMessage::SkipWaiting)
        );
        assert_eq!(
            ControlMessage::decode(&json!({ "type": "CLIENTS_CLAIM", "extra": 1 })),
            Some(ControlMessage::ClientsClaim)
        );
    }

    #[test]
    fn unknown_and_malformed_messages_are_rejected() {
        assert_eq!(ControlMessage::decode(&json!({ "type": "PING" })), None);
        assert_eq!(ControlMessage::decode(&json!({ "kind": "SKIP_WAITING" })), None);
        assert_eq!(ControlMessage::decode(&json!("SKIP_WAITING")), None);
        assert_eq!(ControlMessage::decode(&Value::Null), None);
    }

    #[test]
    fn acknowledgement_json_shape() {
        assert_eq!(Acknowledgement::success().to_json(), json!({ "success": true }));
    }
}
