//! Worker error type.

use thiserror::Error;

/// Failure of one handler step, carrying the host's error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    /// Cache bucket enumeration, population, or deletion failed.
    #[error("cache storage failed: {0}")]
    Cache(String),
    /// The host rejected a notification.
    #[error("notification display failed: {0}")]
    Notification(String),
    /// Client enumeration, focus, navigation, opening, or claiming failed.
    #[error("client routing failed: {0}")]
    Clients(String),
    /// A call on the worker's own registration scope failed.
    #[error("worker scope call failed: {0}")]
    Scope(String),
    /// The acknowledgement could not be posted to the sender's port.
    #[error("reply could not be posted: {0}")]
    Reply(String),
    /// The background reminder check failed.
    #[error("background check failed: {0}")]
    BackgroundCheck(String),
}
