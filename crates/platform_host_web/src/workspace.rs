//! Typed facade over the host's workspace file commands.
//!
//! Every method is one request/response round trip through [`HostBridge`]. Nothing is retried,
//! re-sorted, or reinterpreted here: host failures come back exactly as the host reported them.

use platform_host::{
    normalize_folder_selection, DialogOpenArgs, FolderPickerOptions, HostCallError, PathArgs,
    RenameArgs, WriteFileArgs, CREATE_DIR_COMMAND, DELETE_NODE_COMMAND, DIALOG_OPEN_COMMAND,
    LIST_DIR_COMMAND, READ_FILE_COMMAND, RENAME_NODE_COMMAND, SET_WORKSPACE_COMMAND,
    WRITE_FILE_COMMAND,
};
use serde_json::Value;

use crate::binding::{shared_bridge, HostBridge};

#[derive(Debug, Clone)]
/// Workspace file operations exposed by the host process.
pub struct WorkspaceGateway {
    bridge: HostBridge,
}

impl WorkspaceGateway {
    /// Creates a gateway over `bridge`.
    pub fn new(bridge: HostBridge) -> Self {
        Self { bridge }
    }

    /// Creates a gateway over the process-wide bridge.
    pub fn shared() -> Self {
        Self::new(shared_bridge())
    }

    /// Returns the underlying bridge.
    pub fn bridge(&self) -> &HostBridge {
        &self.bridge
    }

    /// Reads `path` as text.
    ///
    /// A detached host (no-op transport) yields empty text.
    ///
    /// # Errors
    ///
    /// Fails when the host cannot read the path (missing, unreadable, outside the workspace).
    pub async fn read_file(&self, path: &str) -> Result<String, HostCallError> {
        let text: Option<String> = self
            .bridge
            .call(READ_FILE_COMMAND, &PathArgs { path })
            .await?;
        Ok(text.unwrap_or_default())
    }

    /// Overwrites `path` with `content`.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn write_file(&self, path: &str, content: &str) -> Result<(), HostCallError> {
        self.call_unit(WRITE_FILE_COMMAND, &WriteFileArgs { path, content })
            .await
    }

    /// Lists child names of `path` in host order.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn list_dir(&self, path: &str) -> Result<Vec<String>, HostCallError> {
        let names: Option<Vec<String>> = self
            .bridge
            .call(LIST_DIR_COMMAND, &PathArgs { path })
            .await?;
        Ok(names.unwrap_or_default())
    }

    /// Sets the host-side active workspace root.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn set_workspace(&self, path: &str) -> Result<(), HostCallError> {
        self.call_unit(SET_WORKSPACE_COMMAND, &PathArgs { path })
            .await
    }

    /// Prompts for a single folder with the native picker.
    ///
    /// Cancellation is `Ok(None)`. Multi-path replies are narrowed to their first path.
    ///
    /// # Errors
    ///
    /// Fails only when the picker itself cannot be shown.
    pub async fn open_folder(&self) -> Result<Option<String>, HostCallError> {
        let selection: Value = self
            .bridge
            .call(
                DIALOG_OPEN_COMMAND,
                &DialogOpenArgs {
                    options: FolderPickerOptions::single_directory(),
                },
            )
            .await?;
        Ok(normalize_folder_selection(selection))
    }

    /// Creates the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn create_dir(&self, path: &str) -> Result<(), HostCallError> {
        self.call_unit(CREATE_DIR_COMMAND, &PathArgs { path }).await
    }

    /// Deletes the file or directory at `path`.
    ///
    /// Confirming recursive deletes is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn delete_node(&self, path: &str) -> Result<(), HostCallError> {
        self.call_unit(DELETE_NODE_COMMAND, &PathArgs { path }).await
    }

    /// Renames or moves `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the host's failure unchanged.
    pub async fn rename_node(&self, from: &str, to: &str) -> Result<(), HostCallError> {
        self.call_unit(RENAME_NODE_COMMAND, &RenameArgs { from, to })
            .await
    }

    // Unit commands reply `null`; any payload is ignored.
    async fn call_unit<A: serde::Serialize>(
        &self,
        command: &str,
        args: &A,
    ) -> Result<(), HostCallError> {
        let _: Value = self.bridge.call(command, args).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{HostCall, MemoryHostTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::transport::NoopHostTransport;

    fn gateway() -> (WorkspaceGateway, MemoryHostTransport) {
        let transport = MemoryHostTransport::default();
        let gateway = WorkspaceGateway::new(HostBridge::with_transport(transport.clone()));
        (gateway, transport)
    }

    #[test]
    fn operations_use_host_command_names_and_field_names() {
        let (gateway, transport) = gateway();

        block_on(async {
            gateway.read_file("a.md").await.expect("read");
            gateway.write_file("a.md", "body").await.expect("write");
            gateway.list_dir("notes").await.expect("list");
            gateway.set_workspace("/home/me/ws").await.expect("set");
            gateway.create_dir("notes/new").await.expect("mkdir");
            gateway.delete_node("notes/old").await.expect("delete");
            gateway.rename_node("a.md", "b.md").await.expect("rename");
        });

        assert_eq!(
            transport.calls(),
            vec![
                HostCall {
                    command: "read_file".to_string(),
                    args: json!({ "path": "a.md" }),
                },
                HostCall {
                    command: "write_file".to_string(),
                    args: json!({ "path": "a.md", "content": "body" }),
                },
                HostCall {
                    command: "list_dir".to_string(),
                    args: json!({ "path": "notes" }),
                },
                HostCall {
                    command: "set_workspace".to_string(),
                    args: json!({ "path": "/home/me/ws" }),
                },
                HostCall {
                    command: "create_dir".to_string(),
                    args: json!({ "path": "notes/new" }),
                },
                HostCall {
                    command: "delete_node".to_string(),
                    args: json!({ "path": "notes/old" }),
                },
                HostCall {
                    command: "rename_node".to_string(),
                    args: json!({ "from": "a.md", "to": "b.md" }),
                },
            ]
        );
    }

    #[test]
    fn read_and_list_return_host_payloads_untouched() {
        let (gateway, transport) = gateway();
        transport.reply_ok("read_file", json!("# Title\n"));
        transport.reply_ok("list_dir", json!(["zeta.md", "alpha.md", "docs"]));

        assert_eq!(
            block_on(gateway.read_file("Title.md")).expect("read"),
            "# Title\n"
        );
        assert_eq!(
            block_on(gateway.list_dir("")).expect("list"),
            vec![
                "zeta.md".to_string(),
                "alpha.md".to_string(),
                "docs".to_string()
            ]
        );
    }

    #[test]
    fn host_failures_surface_unchanged_without_retry() {
        let (gateway, transport) = gateway();
        transport.reply_err(
            "delete_node",
            HostCallError::Host("Path outside workspace".to_string()),
        );

        let err = block_on(gateway.delete_node("../etc")).expect_err("host failure");

        assert_eq!(err, HostCallError::Host("Path outside workspace".to_string()));
        assert_eq!(transport.commands(), vec!["delete_node".to_string()]);
    }

    #[test]
    fn open_folder_sends_single_directory_options() {
        let (gateway, transport) = gateway();
        transport.reply_ok("plugin:dialog|open", json!("/home/me/notes"));

        assert_eq!(
            block_on(gateway.open_folder()).expect("pick"),
            Some("/home/me/notes".to_string())
        );
        assert_eq!(
            transport.calls()[0].args,
            json!({
                "options": { "directory": true, "multiple": false, "recursive": true }
            })
        );
    }

    #[test]
    fn open_folder_normalizes_cancel_and_multi_selection() {
        let (gateway, transport) = gateway();
        transport.reply_ok("plugin:dialog|open", Value::Null);
        transport.reply_ok("plugin:dialog|open", json!(["/first", "/second"]));

        assert_eq!(block_on(gateway.open_folder()).expect("cancel"), None);
        assert_eq!(
            block_on(gateway.open_folder()).expect("multi"),
            Some("/first".to_string())
        );
    }

    #[test]
    fn detached_host_yields_empty_results() {
        let gateway = WorkspaceGateway::new(HostBridge::with_transport(NoopHostTransport));

        block_on(async {
            assert_eq!(gateway.read_file("a.md").await.expect("read"), "");
            assert!(gateway.list_dir("").await.expect("list").is_empty());
            assert_eq!(gateway.open_folder().await.expect("pick"), None);
            gateway.write_file("a.md", "x").await.expect("write");
        });
    }
}
