//! Notification click routing.

use leptos::logging;
use platform_host::{DisplayedNotification, WorkerServices};
use url::Url;

use crate::{
    config::{WorkerConfig, DISMISS_ACTION},
    error::WorkerError,
    request::NotificationData,
};

/// Terminal state of one notification interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The dismiss action was chosen; nothing beyond the close happened.
    Dismissed,
    /// An existing same-origin window was focused.
    Focused {
        /// Focused client id.
        client_id: String,
        /// URL the window was navigated to, when the notification carried one.
        navigated_to: Option<String>,
    },
    /// A new window was opened.
    Opened {
        /// URL of the new window.
        url: String,
    },
}

/// Returns whether `client_url` belongs to the serialized `origin`.
///
/// Opaque origins never match.
pub fn is_same_origin(client_url: &str, origin: &str) -> bool {
    let (Ok(client), Ok(own)) = (Url::parse(client_url), Url::parse(origin)) else {
        return false;
    };
    let (client, own) = (client.origin(), own.origin());
    client.is_tuple() && client == own
}

/// Closes clicked notifications and routes the user to the application.
pub struct ClickRouter<'a> {
    services: &'a WorkerServices,
    config: &'a WorkerConfig,
}

impl<'a> ClickRouter<'a> {
    /// Creates a router over `services` and `config`.
    pub fn new(services: &'a WorkerServices, config: &'a WorkerConfig) -> Self {
        Self { services, config }
    }

    /// Handles one click on `notification`; `action` is the chosen button, if any.
    ///
    /// Focuses the first same-origin window in host order and navigates it to the
    /// notification's target URL when one is set; opens a new window otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Clients`] when enumeration, focus, navigation, or opening fails.
    pub async fn route(
        &self,
        notification: &dyn DisplayedNotification,
        action: Option<&str>,
    ) -> Result<ClickOutcome, WorkerError> {
        notification.close();
        if action == Some(DISMISS_ACTION) {
            return Ok(ClickOutcome::Dismissed);
        }

        let target = NotificationData::target_url(&notification.data());
        let clients = &self.services.clients;
        let origin = self.services.scope.origin();
        let windows = clients
            .match_all_windows(true)
            .await
            .map_err(WorkerError::Clients)?;

        if let Some(window) = windows
            .into_iter()
            .find(|window| is_same_origin(&window.url, &origin))
        {
            clients
                .focus(&window.id)
                .await
                .map_err(WorkerError::Clients)?;
            if let Some(url) = &target {
                clients
                    .navigate(&window.id, url)
                    .await
                    .map_err(WorkerError::Clients)?;
            }
            return Ok(ClickOutcome::Focused {
                client_id: window.id,
                navigated_to: target,
            });
        }

        let url = target.unwrap_or_else(|| self.config.defaults.url.clone());
        logging::log!("no open window for notification click; opening {url}");
        clients
            .open_window(&url)
            .await
            .map_err(WorkerError::Clients)?;
        Ok(ClickOutcome::Opened { url })
    }
}
