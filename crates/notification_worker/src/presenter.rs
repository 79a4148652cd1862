//! Notification display for push payloads and foreground requests.

use leptos::logging;
use platform_host::{ReplyPort, WorkerServices};

use crate::{
    config::WorkerConfig,
    error::WorkerError,
    message::Acknowledgement,
    request::{NotificationRequest, NotificationRequestPatch},
};

/// Shows exactly one notification per call, with the configured vibration and actions.
pub struct NotificationPresenter<'a> {
    services: &'a WorkerServices,
    config: &'a WorkerConfig,
}

impl<'a> NotificationPresenter<'a> {
    /// Creates a presenter over `services` and `config`.
    pub fn new(services: &'a WorkerServices, config: &'a WorkerConfig) -> Self {
        Self { services, config }
    }

    /// Displays `request`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Notification`] when the host rejects the notification.
    pub async fn show(&self, request: &NotificationRequest) -> Result<(), WorkerError> {
        let options = request.to_options(&self.config.vibration_pattern);
        self.services
            .notifications
            .show_notification(&request.title, &options)
            .await
            .map_err(WorkerError::Notification)
    }

    /// Displays a notification for a push event's payload text.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Notification`] when the host rejects the notification.
    pub async fn show_push(&self, payload: Option<&str>, now_ms: u64) -> Result<(), WorkerError> {
        let request = NotificationRequest::from_push_payload(payload, self.config, now_ms);
        self.show(&request).await
    }

    /// Displays a foreground-requested notification and acknowledges it on `reply`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Notification`] when the host rejects the notification (no reply is
    /// posted), or [`WorkerError::Reply`] when the acknowledgement cannot be posted.
    pub async fn show_requested(
        &self,
        patch: NotificationRequestPatch,
        reply: Option<&dyn ReplyPort>,
        now_ms: u64,
    ) -> Result<(), WorkerError> {
        let request = NotificationRequest::with_defaults(patch, self.config, now_ms);
        self.show(&request).await?;
        logging::log!("shown requested notification `{}`", request.tag);
        if let Some(port) = reply {
            port.post_json(&Acknowledgement::success().to_json())
                .map_err(WorkerError::Reply)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryReplyPort, MemoryWorkerHost};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn push_payload_is_shown_with_vibration_and_standard_actions() {
        let host = MemoryWorkerHost::new("https://app.test");
        let services = host.services();
        let config = WorkerConfig::default();
        let payload = json!({ "title": "Morning", "body": "Psalm 5" }).to_string();

        block_on(NotificationPresenter::new(&services, &config).show_push(Some(&payload), 7))
            .expect("show push");

        let shown = host.notifications.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Morning");
        assert_eq!(shown[0].options.body, "Psalm 5");
        assert_eq!(shown[0].options.tag, "prayer-notification");
        assert_eq!(shown[0].options.vibrate, vec![200, 100, 200]);
        let actions: Vec<&str> = shown[0]
            .options
            .actions
            .iter()
            .map(|a| a.action.as_str())
            .collect();
        assert_eq!(actions, vec!["open", "dismiss"]);
        assert_eq!(shown[0].options.data, json!({ "url": "/", "timestamp": 7 }));
    }

    #[test]
    fn requested_notification_is_acknowledged_once() {
        let host = MemoryWorkerHost::new("https://app.test");
        let services = host.services();
        let config = WorkerConfig::default();
        let port = MemoryReplyPort::default();
        let patch = NotificationRequestPatch {
            title: Some("T".to_string()),
            body: Some("B".to_string()),
            ..NotificationRequestPatch::default()
        };

        block_on(NotificationPresenter::new(&services, &config).show_requested(
            patch,
            Some(&port),
            1,
        ))
        .expect("show requested");

        let shown = host.notifications.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "T");
        assert_eq!(shown[0].options.body, "B");
        assert_eq!(port.posted(), vec![json!({ "success": true })]);
    }

    #[test]
    fn requested_notification_without_port_is_still_shown() {
        let host = MemoryWorkerHost::new("https://app.test");
        let services = host.services();
        let config = WorkerConfig::default();

        block_on(NotificationPresenter::new(&services, &config).show_requested(
            NotificationRequestPatch::default(),
            None,
            1,
        ))
        .expect("show requested");

        assert_eq!(host.notifications.shown()[0].title, "Prayer Reminder");
    }
}
