//! Webview transport bridge for host IPC.
//!
//! `interop` routes to the wasm32 Tauri IPC glue or to a non-wasm fallback so callers see one
//! API on every target.

mod interop;

use platform_host::HostCallError;
use serde_json::Value;

/// Returns whether a Tauri host is reachable from the current context.
pub fn host_attached() -> bool {
    interop::host_attached()
}

/// Sends one IPC command to the host and awaits its reply.
pub async fn invoke(command: &str, args: Value) -> Result<Value, HostCallError> {
    interop::invoke(command, args).await
}
