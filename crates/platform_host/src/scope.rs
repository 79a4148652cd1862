//! Worker global-scope and message-reply contracts.

use std::{cell::Cell, cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde_json::Value;

/// Object-safe boxed future used by [`WorkerScopeService`].
pub type WorkerScopeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the worker's own registration lifecycle.
pub trait WorkerScopeService {
    /// Activates this worker version immediately, superseding a waiting or active predecessor.
    fn skip_waiting<'a>(&'a self) -> WorkerScopeFuture<'a, Result<(), String>>;

    /// Returns the serialized origin (`scheme://host[:port]`) the worker runs under.
    fn origin(&self) -> String;
}

/// Reply channel transferred with a foreground message.
pub trait ReplyPort {
    /// Posts one JSON message back to the sender.
    fn post_json(&self, message: &Value) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op scope for unsupported targets; reports an empty origin.
pub struct NoopWorkerScope;

impl WorkerScopeService for NoopWorkerScope {
    fn skip_waiting<'a>(&'a self) -> WorkerScopeFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn origin(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone)]
/// In-memory scope with a fixed origin that counts skip-waiting calls.
pub struct MemoryWorkerScope {
    origin: String,
    skip_waiting_calls: Rc<Cell<usize>>,
}

impl MemoryWorkerScope {
    /// Creates a scope running under `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            skip_waiting_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Returns how many times skip-waiting was requested.
    pub fn skip_waiting_calls(&self) -> usize {
        self.skip_waiting_calls.get()
    }
}

impl WorkerScopeService for MemoryWorkerScope {
    fn skip_waiting<'a>(&'a self) -> WorkerScopeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.skip_waiting_calls
                .set(self.skip_waiting_calls.get() + 1);
            Ok(())
        })
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory reply port that records posted messages.
pub struct MemoryReplyPort {
    posted: Rc<RefCell<Vec<Value>>>,
}

impl MemoryReplyPort {
    /// Returns all posted messages, oldest first.
    pub fn posted(&self) -> Vec<Value> {
        self.posted.borrow().clone()
    }
}

impl ReplyPort for MemoryReplyPort {
    fn post_json(&self, message: &Value) -> Result<(), String> {
        self.posted.borrow_mut().push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    #[test]
    fn memory_worker_scope_counts_skip_waiting() {
        let scope = MemoryWorkerScope::new("https://app.test");
        let scope_obj: &dyn WorkerScopeService = &scope;
        block_on(scope_obj.skip_waiting()).expect("skip waiting");
        block_on(scope_obj.skip_waiting()).expect("skip waiting");
        assert_eq!(scope.skip_waiting_calls(), 2);
        assert_eq!(scope_obj.origin(), "https://app.test");
    }

    #[test]
    fn memory_reply_port_records_messages() {
        let port = MemoryReplyPort::default();
        let port_obj: &dyn ReplyPort = &port;
        port_obj.post_json(&json!({ "success": true })).expect("post");
        assert_eq!(port.posted(), vec![json!({ "success": true })]);
    }

    #[test]
    fn noop_worker_scope_is_successful() {
        block_on(NoopWorkerScope.skip_waiting()).expect("skip waiting");
        assert_eq!(NoopWorkerScope.origin(), "");
    }
}
