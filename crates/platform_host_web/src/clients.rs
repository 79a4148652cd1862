//! Foreground-client host-service adapter.

use platform_host::{ClientWindow, ClientsFuture, ClientsService};

#[derive(Debug, Clone, Copy, Default)]
/// Clients adapter backed by the worker's `clients` object.
pub struct WebClientsService;

impl ClientsService for WebClientsService {
    fn match_all_windows<'a>(
        &'a self,
        include_uncontrolled: bool,
    ) -> ClientsFuture<'a, Result<Vec<ClientWindow>, String>> {
        Box::pin(async move { crate::bridge::match_window_clients(include_uncontrolled).await })
    }

    fn focus<'a>(&'a self, client_id: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::focus_client(client_id).await })
    }

    fn navigate<'a>(
        &'a self,
        client_id: &'a str,
        url: &'a str,
    ) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::navigate_client(client_id, url).await })
    }

    fn open_window<'a>(&'a self, url: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::open_window(url).await })
    }

    fn claim<'a>(&'a self) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::claim_clients().await })
    }
}
