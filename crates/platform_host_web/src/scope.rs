//! Worker scope and reply-port adapters.

use platform_host::{WorkerScopeFuture, WorkerScopeService};

#[derive(Debug, Clone, Default)]
/// Scope adapter for the running service worker.
pub struct WebWorkerScope {
    origin: String,
}

impl WebWorkerScope {
    /// Reads the worker origin from the global scope.
    ///
    /// # Errors
    ///
    /// Returns an error outside a service-worker global scope.
    pub fn detect() -> Result<Self, String> {
        Ok(Self {
            origin: crate::bridge::scope_origin()?,
        })
    }
}

impl WorkerScopeService for WebWorkerScope {
    fn skip_waiting<'a>(&'a self) -> WorkerScopeFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::skip_waiting().await })
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}

#[cfg(target_arch = "wasm32")]
pub use port::WebReplyPort;

#[cfg(target_arch = "wasm32")]
mod port {
    use platform_host::ReplyPort;
    use serde::Serialize;
    use serde_json::Value;
    use serde_wasm_bindgen::Serializer;

    /// `MessagePort` transferred with an `ExtendableMessageEvent`.
    #[derive(Debug, Clone)]
    pub struct WebReplyPort(web_sys::MessagePort);

    impl WebReplyPort {
        /// Wraps a transferred port.
        pub fn new(port: web_sys::MessagePort) -> Self {
            Self(port)
        }
    }

    impl ReplyPort for WebReplyPort {
        fn post_json(&self, message: &Value) -> Result<(), String> {
            let message = message
                .serialize(&Serializer::json_compatible())
                .map_err(|e| e.to_string())?;
            self.0
                .post_message(&message)
                .map_err(crate::bridge::js_error_to_string)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_shim_has_no_worker_origin() {
        assert!(WebWorkerScope::detect().is_err());
    }
}
