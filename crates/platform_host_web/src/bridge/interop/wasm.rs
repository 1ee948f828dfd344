use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::*;

#[wasm_bindgen(inline_js = r#"
function tauriInternals() {
  if (typeof window === 'undefined') return null;
  const internals = window.__TAURI_INTERNALS__;
  if (!internals || typeof internals.invoke !== 'function') return null;
  return internals;
}

export function jsHostAttached() {
  return tauriInternals() !== null;
}

export function jsHostInvoke(command, args) {
  const internals = tauriInternals();
  if (internals === null) {
    return Promise.reject(new Error('Tauri IPC is unavailable in this context'));
  }
  return internals.invoke(command, args ?? {});
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsHostAttached)]
    fn js_host_attached() -> bool;
    #[wasm_bindgen(js_name = jsHostInvoke)]
    fn js_host_invoke(command: &str, args: JsValue) -> Promise;
}

// Tauri rejects with the command's `Err(String)` as a bare string; anything else is the IPC
// layer failing.
fn js_error_to_call_error(err: JsValue) -> HostCallError {
    if let Some(text) = err.as_string() {
        return HostCallError::Host(text);
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return HostCallError::Transport(text);
        }
    }
    HostCallError::Transport(format!("{err:?}"))
}

pub fn host_attached() -> bool {
    js_host_attached()
}

pub async fn invoke(command: &str, args: Value) -> Result<Value, HostCallError> {
    let args = args
        .serialize(&Serializer::json_compatible())
        .map_err(|e| HostCallError::Encode {
            command: command.to_string(),
            message: e.to_string(),
        })?;
    let reply = JsFuture::from(js_host_invoke(command, args))
        .await
        .map_err(js_error_to_call_error)?;
    if reply.is_null() || reply.is_undefined() {
        return Ok(Value::Null);
    }
    from_value(reply).map_err(|e| HostCallError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}
