//! Notification-domain contracts, display models, and test adapters.

mod service;
mod types;

pub use service::{
    DisplayedNotification, MemoryDisplayedNotification, MemoryNotificationService,
    NoopNotificationService, NotificationFuture, NotificationService,
};
pub use types::{NotificationAction, NotificationOptions, ShownNotification};
