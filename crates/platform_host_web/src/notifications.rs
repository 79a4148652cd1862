//! Notification host-service adapters for the service-worker registration.

use platform_host::{NotificationFuture, NotificationOptions, NotificationService};

#[derive(Debug, Clone, Copy, Default)]
/// Notification adapter backed by `ServiceWorkerRegistration.showNotification`.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            crate::bridge::show_notification(title, options)
                .await
                .map_err(|err| format!("notification dispatch failed: {err}"))
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use displayed::WebDisplayedNotification;

#[cfg(target_arch = "wasm32")]
mod displayed {
    use platform_host::DisplayedNotification;
    use serde_json::Value;

    /// Notification instance delivered with a `notificationclick`/`notificationclose` event.
    #[derive(Debug, Clone)]
    pub struct WebDisplayedNotification(web_sys::Notification);

    impl WebDisplayedNotification {
        /// Wraps the event's notification.
        pub fn new(notification: web_sys::Notification) -> Self {
            Self(notification)
        }
    }

    impl DisplayedNotification for WebDisplayedNotification {
        fn close(&self) {
            self.0.close();
        }

        fn tag(&self) -> String {
            self.0.tag()
        }

        fn data(&self) -> Value {
            serde_wasm_bindgen::from_value(self.0.data()).unwrap_or(Value::Null)
        }
    }
}
