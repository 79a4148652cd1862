//! Background reminder check shared by `sync` and `periodicsync`.

use std::future::Future;

use leptos::logging;

use crate::{config::WorkerConfig, error::WorkerError};

/// Host trigger that requested a background check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTrigger {
    /// One-shot background sync.
    Sync,
    /// Periodic background sync.
    PeriodicSync,
}

impl BackgroundTrigger {
    /// Tag that this trigger must carry to run the check.
    pub fn expected_tag(self, config: &WorkerConfig) -> &str {
        match self {
            Self::Sync => &config.sync_tag,
            Self::PeriodicSync => &config.periodic_sync_tag,
        }
    }
}

/// Result of one background trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundOutcome {
    /// The tag did not match; the check did not run.
    Ignored,
    /// The check ran to completion.
    Completed,
    /// The check failed; the error was logged.
    Failed(WorkerError),
}

/// Runs `check` when `tag` matches the trigger's configured tag.
///
/// Never fails: a check error is logged and reported as [`BackgroundOutcome::Failed`].
pub async fn run_background_check<F>(
    trigger: BackgroundTrigger,
    tag: &str,
    config: &WorkerConfig,
    check: F,
) -> BackgroundOutcome
where
    F: Future<Output = Result<(), WorkerError>>,
{
    if tag != trigger.expected_tag(config) {
        logging::log!("ignoring {trigger:?} with tag `{tag}`");
        return BackgroundOutcome::Ignored;
    }
    match check.await {
        Ok(()) => BackgroundOutcome::Completed,
        Err(err) => {
            logging::error!("background reminder check failed: {err}");
            BackgroundOutcome::Failed(err)
        }
    }
}

/// Reminder check run in the background.
///
/// Reserved for polling a reminder endpoint; reminders currently arrive by push only.
pub async fn check_for_due_reminders() -> Result<(), WorkerError> {
    logging::log!("background reminder check: nothing to poll");
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn matching_tags_run_the_check() {
        let config = WorkerConfig::default();
        assert_eq!(
            block_on(run_background_check(
                BackgroundTrigger::Sync,
                "prayer-check",
                &config,
                check_for_due_reminders(),
            )),
            BackgroundOutcome::Completed
        );
        assert_eq!(
            block_on(run_background_check(
                BackgroundTrigger::PeriodicSync,
                "prayer-reminder-check",
                &config,
                check_for_due_reminders(),
            )),
            BackgroundOutcome::Completed
        );
    }

    #[test]
    fn other_tags_are_ignored() {
        let config = WorkerConfig::default();
        assert_eq!(
            block_on(run_background_check(
                BackgroundTrigger::PeriodicSync,
                "prayer-check",
                &config,
                async { Err::<(), _>(WorkerError::BackgroundCheck("ran".to_string())) },
            )),
            BackgroundOutcome::Ignored
        );
    }

    #[test]
    fn check_failure_is_contained() {
        let config = WorkerConfig::default();
        let outcome = block_on(run_background_check(
            BackgroundTrigger::Sync,
            "prayer-check",
            &config,
            async {
                Err::<(), _>(WorkerError::BackgroundCheck(
                    "server unreachable".to_string(),
                ))
            },
        ));
        assert_eq!(
            outcome,
            BackgroundOutcome::Failed(WorkerError::BackgroundCheck(
                "server unreachable".to_string()
            ))
        );
    }
}
