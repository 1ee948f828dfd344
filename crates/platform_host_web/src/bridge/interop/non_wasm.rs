use super::*;

fn unsupported(command: &str) -> String {
    format!("Tauri IPC is only available when compiled for wasm32 (command `{command}`)")
}

pub fn host_attached() -> bool {
    false
}

pub async fn invoke(command: &str, _args: Value) -> Result<Value, HostCallError> {
    Err(HostCallError::Transport(unsupported(command)))
}
