//! Notification service contracts and adapters.

use std::{cell::Cell, cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde_json::Value;

use super::types::{NotificationOptions, ShownNotification};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user-visible notifications.
pub trait NotificationService {
    /// Displays a notification and resolves once the host has accepted it.
    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

/// Handle to a notification instance delivered with a click or close event.
pub trait DisplayedNotification {
    /// Removes the notification from the host surface.
    fn close(&self);

    /// Returns the notification tag.
    fn tag(&self) -> String;

    /// Returns the opaque payload attached when the notification was shown.
    fn data(&self) -> Value;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn show_notification<'a>(
        &'a self,
        _title: &'a str,
        _options: &'a NotificationOptions,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that records every shown notification.
pub struct MemoryNotificationService {
    shown: Rc<RefCell<Vec<ShownNotification>>>,
}

impl MemoryNotificationService {
    /// Returns all notifications shown so far, oldest first.
    pub fn shown(&self) -> Vec<ShownNotification> {
        self.shown.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn show_notification<'a>(
        &'a self,
        title: &'a str,
        options: &'a NotificationOptions,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.shown.borrow_mut().push(ShownNotification {
                title: title.to_string(),
                options: options.clone(),
            });
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory displayed notification that records close calls.
pub struct MemoryDisplayedNotification {
    tag: String,
    data: Value,
    close_calls: Rc<Cell<usize>>,
}

impl MemoryDisplayedNotification {
    /// Creates a notification handle with `tag` and `data`.
    pub fn new(tag: impl Into<String>, data: Value) -> Self {
        Self {
            tag: tag.into(),
            data,
            close_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Returns how many times [`DisplayedNotification::close`] was called.
    pub fn close_calls(&self) -> usize {
        self.close_calls.get()
    }
}

impl DisplayedNotification for MemoryDisplayedNotification {
    fn close(&self) {
        self.close_calls.set(self.close_calls.get() + 1);
    }

    fn tag(&self) -> String {
        self.tag.clone()
    }

    fn data(&self) -> Value {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    fn options() -> NotificationOptions {
        NotificationOptions {
            body: "body".to_string(),
            icon: "/icon.png".to_string(),
            badge: "/badge.png".to_string(),
            tag: "tag".to_string(),
            require_interaction: false,
            vibrate: vec![200],
            data: json!({ "url": "/" }),
            actions: Vec::new(),
        }
    }

    #[test]
    fn memory_notification_service_records_shown_notifications() {
        let service = MemoryNotificationService::default();
        let service_obj: &dyn NotificationService = &service;
        let options = options();

        block_on(service_obj.show_notification("hello", &options)).expect("show");

        assert_eq!(
            service.shown(),
            vec![ShownNotification {
                title: "hello".to_string(),
                options,
            }]
        );
    }

    #[test]
    fn notification_options_serialize_with_platform_field_names() {
        let value = serde_json::to_value(options()).expect("serialize");
        assert_eq!(value["requireInteraction"], json!(false));
        assert_eq!(value["vibrate"], json!([200]));
        assert!(value.get("require_interaction").is_none());
    }

    #[test]
    fn memory_displayed_notification_counts_close_calls() {
        let notification = MemoryDisplayedNotification::new("t", json!({ "url": "/x" }));
        let handle: &dyn DisplayedNotification = &notification;
        handle.close();
        assert_eq!(notification.close_calls(), 1);
        assert_eq!(handle.tag(), "t");
        assert_eq!(handle.data(), json!({ "url": "/x" }));
    }

    #[test]
    fn noop_notification_service_is_successful() {
        block_on(NoopNotificationService.show_notification("t", &options())).expect("show");
    }
}
