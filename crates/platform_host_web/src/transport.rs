//! Concrete [`HostTransport`] implementations for webview contexts.

use platform_host::{HostCallError, HostTransport, HostTransportFuture};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
/// Transport backed by Tauri IPC (`window.__TAURI_INTERNALS__.invoke`).
pub struct TauriHostTransport;

impl HostTransport for TauriHostTransport {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> HostTransportFuture<'a, Result<Value, HostCallError>> {
        Box::pin(async move { crate::bridge::invoke(command, args).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport used when no host process is attached.
///
/// Performs no I/O: every call logs a diagnostic and resolves with `null`.
pub struct NoopHostTransport;

impl HostTransport for NoopHostTransport {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        _args: Value,
    ) -> HostTransportFuture<'a, Result<Value, HostCallError>> {
        Box::pin(async move {
            leptos::logging::warn!("no host attached; `{command}` call dropped");
            Ok(Value::Null)
        })
    }

    fn is_attached(&self) -> bool {
        false
    }
}
