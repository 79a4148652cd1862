//! Foreground client (window) service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`ClientsService`].
pub type ClientsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Snapshot of one live foreground window reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientWindow {
    /// Host-assigned client identifier, valid for later focus/navigate calls.
    pub id: String,
    /// Current absolute URL of the window.
    pub url: String,
    /// Whether the window currently has focus.
    #[serde(default)]
    pub focused: bool,
}

impl ClientWindow {
    /// Creates an unfocused window snapshot.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            focused: false,
        }
    }
}

/// Host service over the foreground windows a worker can see and control.
pub trait ClientsService {
    /// Lists open window clients in host order.
    ///
    /// When `include_uncontrolled` is set, windows not yet controlled by this worker are listed.
    fn match_all_windows<'a>(
        &'a self,
        include_uncontrolled: bool,
    ) -> ClientsFuture<'a, Result<Vec<ClientWindow>, String>>;

    /// Brings the window `client_id` to the foreground.
    fn focus<'a>(&'a self, client_id: &'a str) -> ClientsFuture<'a, Result<(), String>>;

    /// Navigates the window `client_id` to `url`.
    fn navigate<'a>(
        &'a self,
        client_id: &'a str,
        url: &'a str,
    ) -> ClientsFuture<'a, Result<(), String>>;

    /// Opens a new window at `url`.
    fn open_window<'a>(&'a self, url: &'a str) -> ClientsFuture<'a, Result<(), String>>;

    /// Takes control of every open window in scope without a reload.
    fn claim<'a>(&'a self) -> ClientsFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op clients service for unsupported targets.
pub struct NoopClientsService;

impl ClientsService for NoopClientsService {
    fn match_all_windows<'a>(
        &'a self,
        _include_uncontrolled: bool,
    ) -> ClientsFuture<'a, Result<Vec<ClientWindow>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn focus<'a>(&'a self, _client_id: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn navigate<'a>(
        &'a self,
        _client_id: &'a str,
        _url: &'a str,
    ) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn open_window<'a>(&'a self, _url: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn claim<'a>(&'a self) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// One call observed by [`MemoryClientsService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientsCall {
    /// `match_all_windows` call.
    MatchAll {
        /// Requested `include_uncontrolled` flag.
        include_uncontrolled: bool,
    },
    /// `focus` call.
    Focus(String),
    /// `navigate` call as `(client_id, url)`.
    Navigate(String, String),
    /// `open_window` call.
    OpenWindow(String),
    /// `claim` call.
    Claim,
}

#[derive(Debug, Default)]
struct MemoryClientsState {
    windows: Vec<ClientWindow>,
    calls: Vec<ClientsCall>,
    claim_error: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory clients service with a fixed window list and a call log.
pub struct MemoryClientsService {
    inner: Rc<RefCell<MemoryClientsState>>,
}

impl MemoryClientsService {
    /// Creates a service reporting `windows` in the given order.
    pub fn with_windows(windows: Vec<ClientWindow>) -> Self {
        let service = Self::default();
        service.inner.borrow_mut().windows = windows;
        service
    }

    /// Makes every subsequent [`ClientsService::claim`] call fail with `message`.
    pub fn fail_claim(self, message: impl Into<String>) -> Self {
        self.inner.borrow_mut().claim_error = Some(message.into());
        self
    }

    /// Returns the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<ClientsCall> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: ClientsCall) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn require_window(&self, client_id: &str) -> Result<(), String> {
        if self.inner.borrow().windows.iter().any(|w| w.id == client_id) {
            Ok(())
        } else {
            Err(format!("client `{client_id}` is not open"))
        }
    }
}

impl ClientsService for MemoryClientsService {
    fn match_all_windows<'a>(
        &'a self,
        include_uncontrolled: bool,
    ) -> ClientsFuture<'a, Result<Vec<ClientWindow>, String>> {
        Box::pin(async move {
            self.record(ClientsCall::MatchAll {
                include_uncontrolled,
            });
            Ok(self.inner.borrow().windows.clone())
        })
    }

    fn focus<'a>(&'a self, client_id: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.require_window(client_id)?;
            self.record(ClientsCall::Focus(client_id.to_string()));
            for window in &mut self.inner.borrow_mut().windows {
                window.focused = window.id == client_id;
            }
            Ok(())
        })
    }

    fn navigate<'a>(
        &'a self,
        client_id: &'a str,
        url: &'a str,
    ) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.require_window(client_id)?;
            self.record(ClientsCall::Navigate(
                client_id.to_string(),
                url.to_string(),
            ));
            Ok(())
        })
    }

    fn open_window<'a>(&'a self, url: &'a str) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(ClientsCall::OpenWindow(url.to_string()));
            Ok(())
        })
    }

    fn claim<'a>(&'a self) -> ClientsFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.record(ClientsCall::Claim);
            match self.inner.borrow().claim_error.clone() {
                Some(message) => Err(message),
                None => Ok(()),
            }
        })
    }
}
