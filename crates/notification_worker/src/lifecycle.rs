//! Install/activate handling: version takeover, precache, stale-bucket pruning.

use futures::future::join_all;
use futures::join;
use leptos::logging;
use platform_host::WorkerServices;

use crate::{config::WorkerConfig, error::WorkerError};

/// Runs the install and activate steps against one configured cache version.
pub struct LifecycleManager<'a> {
    services: &'a WorkerServices,
    config: &'a WorkerConfig,
}

impl<'a> LifecycleManager<'a> {
    /// Creates a manager over `services` and `config`.
    pub fn new(services: &'a WorkerServices, config: &'a WorkerConfig) -> Self {
        Self { services, config }
    }

    /// Supersedes the previous worker version and precaches the app shell.
    ///
    /// A precache failure is logged and does not fail installation.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Scope`] when skip-waiting is rejected.
    pub async fn install(&self) -> Result<(), WorkerError> {
        let (skipped, ()) = join!(self.skip_waiting(), self.precache());
        skipped
    }

    /// Activates this worker version without waiting for older instances to finish.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Scope`] when the host rejects the request.
    pub async fn skip_waiting(&self) -> Result<(), WorkerError> {
        self.services
            .scope
            .skip_waiting()
            .await
            .map_err(WorkerError::Scope)
    }

    async fn precache(&self) {
        let cache_name = self.config.cache_version.as_str();
        match self
            .services
            .caches
            .add_all(cache_name, &self.config.precache_urls)
            .await
        {
            Ok(()) => logging::log!(
                "precached {} resources into {cache_name}",
                self.config.precache_urls.len()
            ),
            Err(err) => logging::warn!("precache into {cache_name} failed: {err}"),
        }
    }

    /// Deletes stale buckets and claims open windows concurrently.
    ///
    /// Returns the names of the buckets that were deleted.
    ///
    /// # Errors
    ///
    /// Returns the claim error first, then a bucket enumeration error.
    pub async fn activate(&self) -> Result<Vec<String>, WorkerError> {
        let (pruned, claimed) = join!(self.prune_stale_caches(), self.claim_clients());
        claimed?;
        pruned
    }

    /// Deletes every bucket whose name differs from the configured cache version.
    ///
    /// Individual delete failures are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Cache`] when the bucket names cannot be listed.
    pub async fn prune_stale_caches(&self) -> Result<Vec<String>, WorkerError> {
        let current = self.config.cache_version.as_str();
        let names = self
            .services
            .caches
            .cache_names()
            .await
            .map_err(WorkerError::Cache)?;
        let stale: Vec<&String> = names.iter().filter(|name| *name != current).collect();

        let results = join_all(
            stale
                .iter()
                .map(|name| self.services.caches.delete_cache(name.as_str())),
        )
        .await;

        let mut deleted = Vec::new();
        for (name, result) in stale.into_iter().zip(results) {
            match result {
                Ok(true) => {
                    logging::log!("deleted stale cache {name}");
                    deleted.push(name.clone());
                }
                Ok(false) => {}
                Err(err) => logging::warn!("deleting stale cache {name} failed: {err}"),
            }
        }
        Ok(deleted)
    }

    /// Takes control of all open windows without a reload.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Clients`] when the host rejects the claim.
    pub async fn claim_clients(&self) -> Result<(), WorkerError> {
        self.services
            .clients
            .claim()
            .await
            .map_err(WorkerError::Clients)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{ClientsCall, MemoryCacheStorage, MemoryClientsService, MemoryWorkerHost};
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> WorkerConfig {
        WorkerConfig::default()
    }

    #[test]
    fn install_skips_waiting_and_precaches_shell() {
        let host = MemoryWorkerHost::new("https://app.test");
        let services = host.services();
        let config = config();

        block_on(LifecycleManager::new(&services, &config).install()).expect("install");

        assert_eq!(host.scope.skip_waiting_calls(), 1);
        assert_eq!(
            host.caches.cached_urls("adullam-prayer-v1"),
            Some(vec!["/".to_string(), "/pwa-192x192.png".to_string()])
        );
    }

    #[test]
    fn install_succeeds_when_precache_fails() {
        let host = MemoryWorkerHost::new("https://app.test")
            .with_caches(MemoryCacheStorage::default().fail_add_all("network down"));
        let services = host.services();
        let config = config();

        block_on(LifecycleManager::new(&services, &config).install()).expect("install");

        assert_eq!(host.scope.skip_waiting_calls(), 1);
        assert_eq!(host.caches.cached_urls("adullam-prayer-v1"), None);
    }

    #[test]
    fn activate_deletes_only_stale_buckets_and_claims() {
        let host = MemoryWorkerHost::new("https://app.test").with_caches(
            MemoryCacheStorage::with_buckets(["adullam-prayer-v0", "adullam-prayer-v1"]),
        );
        let services = host.services();
        let config = config();

        let deleted =
            block_on(LifecycleManager::new(&services, &config).activate()).expect("activate");

        assert_eq!(deleted, vec!["adullam-prayer-v0".to_string()]);
        assert_eq!(host.caches.deleted(), vec!["adullam-prayer-v0".to_string()]);
        assert!(host.caches.cached_urls("adullam-prayer-v1").is_some());
        assert_eq!(host.clients.calls(), vec![ClientsCall::Claim]);
    }

    #[test]
    fn activate_uses_configured_version() {
        let host = MemoryWorkerHost::new("https://app.test").with_caches(
            MemoryCacheStorage::with_buckets(["adullam-prayer-v1", "other", "adullam-prayer-v2"]),
        );
        let services = host.services();
        let config = WorkerConfig::new("adullam-prayer-v2", Vec::new());

        let deleted =
            block_on(LifecycleManager::new(&services, &config).activate()).expect("activate");

        assert_eq!(
            deleted,
            vec!["adullam-prayer-v1".to_string(), "other".to_string()]
        );
    }

    #[test]
    fn activate_reports_claim_failure_after_pruning() {
        let host = MemoryWorkerHost::new("https://app.test")
            .with_caches(MemoryCacheStorage::with_buckets(["stale"]))
            .with_clients(MemoryClientsService::default().fail_claim("not active"));
        let services = host.services();
        let config = config();

        let err = block_on(LifecycleManager::new(&services, &config).activate()).unwrap_err();

        assert_eq!(err, WorkerError::Clients("not active".to_string()));
        assert_eq!(host.caches.deleted(), vec!["stale".to_string()]);
    }
}
