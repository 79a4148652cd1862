//! Event dispatch: one entry point per platform event, resolved when all its work is done.

use std::rc::Rc;

use leptos::logging;
use platform_host::{unix_time_ms_now, DisplayedNotification, ReplyPort, WorkerServices};
use serde_json::Value;

use crate::{
    background::{check_for_due_reminders, run_background_check, BackgroundTrigger},
    click_router::ClickRouter,
    config::WorkerConfig,
    error::WorkerError,
    lifecycle::LifecycleManager,
    message::ControlMessage,
    presenter::NotificationPresenter,
};

/// Platform event types the worker listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerEventKind {
    /// `install`
    Install,
    /// `activate`
    Activate,
    /// `push`
    Push,
    /// `notificationclick`
    NotificationClick,
    /// `notificationclose`
    NotificationClose,
    /// `sync`
    Sync,
    /// `periodicsync`
    PeriodicSync,
    /// `message`
    Message,
}

impl WorkerEventKind {
    const ALWAYS: [Self; 7] = [
        Self::Install,
        Self::Activate,
        Self::Push,
        Self::NotificationClick,
        Self::NotificationClose,
        Self::Sync,
        Self::Message,
    ];

    /// Platform event type string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Activate => "activate",
            Self::Push => "push",
            Self::NotificationClick => "notificationclick",
            Self::NotificationClose => "notificationclose",
            Self::Sync => "sync",
            Self::PeriodicSync => "periodicsync",
            Self::Message => "message",
        }
    }

    /// Parses a platform event type string.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALWAYS
            .into_iter()
            .chain([Self::PeriodicSync])
            .find(|kind| kind.name() == name)
    }
}

/// One platform event with the data its handler needs.
pub enum WorkerEvent {
    /// New version installed.
    Install,
    /// New version activated.
    Activate,
    /// Push received; `payload` is the message text when the push carried data.
    Push {
        /// Payload text.
        payload: Option<String>,
    },
    /// Notification body or action button clicked.
    NotificationClick {
        /// The clicked notification.
        notification: Rc<dyn DisplayedNotification>,
        /// Chosen action id; `None` for a body click.
        action: Option<String>,
    },
    /// Notification dismissed by the user or the host.
    NotificationClose {
        /// The closed notification.
        notification: Rc<dyn DisplayedNotification>,
    },
    /// One-shot background sync.
    Sync {
        /// Registration tag.
        tag: String,
    },
    /// Periodic background sync.
    PeriodicSync {
        /// Registration tag.
        tag: String,
    },
    /// Message posted by a foreground page.
    Message {
        /// Structured-cloned message data.
        data: Value,
        /// First transferred port, if any.
        reply: Option<Rc<dyn ReplyPort>>,
    },
}

impl WorkerEvent {
    /// Kind of this event.
    pub fn kind(&self) -> WorkerEventKind {
        match self {
            Self::Install => WorkerEventKind::Install,
            Self::Activate => WorkerEventKind::Activate,
            Self::Push { .. } => WorkerEventKind::Push,
            Self::NotificationClick { .. } => WorkerEventKind::NotificationClick,
            Self::NotificationClose { .. } => WorkerEventKind::NotificationClose,
            Self::Sync { .. } => WorkerEventKind::Sync,
            Self::PeriodicSync { .. } => WorkerEventKind::PeriodicSync,
            Self::Message { .. } => WorkerEventKind::Message,
        }
    }
}

/// The notification lifecycle handler.
///
/// Cheap to clone; clones share services and configuration.
#[derive(Clone)]
pub struct NotificationWorker {
    services: WorkerServices,
    config: Rc<WorkerConfig>,
    clock: fn() -> u64,
}

impl NotificationWorker {
    /// Creates a worker over `services` with `config`.
    pub fn new(services: WorkerServices, config: WorkerConfig) -> Self {
        Self {
            services,
            config: Rc::new(config),
            clock: unix_time_ms_now,
        }
    }

    /// Replaces the unix-millisecond clock used to timestamp notifications.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Event kinds to register, gated on the capability snapshot taken at startup.
    pub fn listened_events(&self) -> Vec<WorkerEventKind> {
        let mut kinds = WorkerEventKind::ALWAYS.to_vec();
        if self.services.capabilities.periodic_sync.is_available() {
            kinds.push(WorkerEventKind::PeriodicSync);
        }
        kinds
    }

    /// Whether a listener for `kind` is registered.
    pub fn listens_to(&self, kind: WorkerEventKind) -> bool {
        self.listened_events().contains(&kind)
    }

    /// Handles one event; the returned future resolves once all work for it has resolved.
    ///
    /// # Errors
    ///
    /// Returns the first unrecoverable platform failure of the handler.
    pub async fn handle(&self, event: WorkerEvent) -> Result<(), WorkerError> {
        let services = &self.services;
        let config = self.config.as_ref();
        match event {
            WorkerEvent::Install => LifecycleManager::new(services, config).install().await,
            WorkerEvent::Activate => {
                let deleted = LifecycleManager::new(services, config).activate().await?;
                logging::log!(
                    "activated {} ({} stale caches removed)",
                    config.cache_version,
                    deleted.len()
                );
                Ok(())
            }
            WorkerEvent::Push { payload } => {
                NotificationPresenter::new(services, config)
                    .show_push(payload.as_deref(), (self.clock)())
                    .await
            }
            WorkerEvent::NotificationClick {
                notification,
                action,
            } => {
                let outcome = ClickRouter::new(services, config)
                    .route(notification.as_ref(), action.as_deref())
                    .await?;
                logging::log!("notification `{}` click: {outcome:?}", notification.tag());
                Ok(())
            }
            WorkerEvent::NotificationClose { notification } => {
                logging::log!("notification `{}` closed", notification.tag());
                Ok(())
            }
            WorkerEvent::Sync { tag } => {
                self.background_check(BackgroundTrigger::Sync, &tag).await;
                Ok(())
            }
            WorkerEvent::PeriodicSync { tag } => {
                self.background_check(BackgroundTrigger::PeriodicSync, &tag)
                    .await;
                Ok(())
            }
            WorkerEvent::Message { data, reply } => self.handle_message(&data, reply).await,
        }
    }

    async fn background_check(&self, trigger: BackgroundTrigger, tag: &str) {
        let outcome =
            run_background_check(trigger, tag, &self.config, check_for_due_reminders()).await;
        logging::log!("{trigger:?} `{tag}`: {outcome:?}");
    }

    async fn handle_message(
        &self,
        data: &Value,
        reply: Option<Rc<dyn ReplyPort>>,
    ) -> Result<(), WorkerError> {
        let services = &self.services;
        let config = self.config.as_ref();
        match ControlMessage::decode(data) {
            Some(ControlMessage::ShowNotification { payload }) => {
                NotificationPresenter::new(services, config)
                    .show_requested(payload, reply.as_deref(), (self.clock)())
                    .await
            }
            Some(ControlMessage::SkipWaiting) => {
                LifecycleManager::new(services, config).skip_waiting().await
            }
            Some(ControlMessage::ClientsClaim) => {
                LifecycleManager::new(services, config)
                    .claim_clients()
                    .await
            }
            None => Ok(()),
        }
    }
}
