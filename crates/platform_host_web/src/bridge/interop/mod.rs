//! Target routing for the IPC transport glue.

use platform_host::HostCallError;
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn host_attached() -> bool {
    imp::host_attached()
}

pub async fn invoke(command: &str, args: Value) -> Result<Value, HostCallError> {
    imp::invoke(command, args).await
}
