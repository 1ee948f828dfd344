//! File and workspace flows that pair host calls with recent files bookkeeping.

use platform_host::{HostCallError, PrefsStore, RecentFilesStore};
use platform_host_web::WorkspaceGateway;
use serde::{Deserialize, Serialize};

// The workspace root relative to itself.
const WORKSPACE_ROOT: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A file read from the host.
pub struct OpenedFile {
    /// Path as requested.
    pub path: String,
    /// Full text content.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A workspace root chosen with the folder picker.
pub struct OpenedWorkspace {
    /// Selected root path.
    pub root: String,
    /// Top-level entries in host order.
    pub entries: Vec<String>,
}

/// Editor-level operations used by UI handlers.
///
/// Successful opens and saves are recorded in the recent files list. Host failures are returned
/// unchanged and leave the list untouched.
#[derive(Debug, Clone)]
pub struct EditorCommands<S> {
    gateway: WorkspaceGateway,
    recents: RecentFilesStore<S>,
}

impl<S: PrefsStore> EditorCommands<S> {
    /// Combines a gateway with a recent files list.
    pub fn new(gateway: WorkspaceGateway, recents: RecentFilesStore<S>) -> Self {
        Self { gateway, recents }
    }

    /// Returns the workspace gateway.
    pub fn gateway(&self) -> &WorkspaceGateway {
        &self.gateway
    }

    /// Returns the recent files list.
    pub fn recents(&self) -> &RecentFilesStore<S> {
        &self.recents
    }

    /// Reads `path` and records it as recently used.
    ///
    /// # Errors
    ///
    /// Returns the host's read failure unchanged.
    pub async fn open_file(&self, path: &str) -> Result<OpenedFile, HostCallError> {
        let content = self.gateway.read_file(path).await?;
        self.remember(path).await;
        Ok(OpenedFile {
            path: path.to_string(),
            content,
        })
    }

    /// Writes `content` to `path` and records it as recently used.
    ///
    /// # Errors
    ///
    /// Returns the host's write failure unchanged.
    pub async fn save_file(&self, path: &str, content: &str) -> Result<(), HostCallError> {
        self.gateway.write_file(path, content).await?;
        self.remember(path).await;
        Ok(())
    }

    /// Prompts for a folder, makes it the active workspace, and lists its top level.
    ///
    /// Returns `Ok(None)` when the picker is cancelled; no host state changes in that case.
    ///
    /// # Errors
    ///
    /// Returns the first host failure unchanged.
    pub async fn open_workspace(&self) -> Result<Option<OpenedWorkspace>, HostCallError> {
        let Some(root) = self.gateway.open_folder().await? else {
            return Ok(None);
        };
        self.gateway.set_workspace(&root).await?;
        let entries = self.gateway.list_dir(WORKSPACE_ROOT).await?;
        Ok(Some(OpenedWorkspace { root, entries }))
    }

    async fn remember(&self, path: &str) {
        if let Err(err) = self.recents.add_to_recents(path).await {
            leptos::logging::warn!("recent files update failed for `{path}`: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{HostCall, MemoryHostTransport, MemoryPrefsStore};
    use platform_host_web::HostBridge;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    struct Harness {
        commands: EditorCommands<MemoryPrefsStore>,
        transport: MemoryHostTransport,
        prefs: MemoryPrefsStore,
    }

    fn harness() -> Harness {
        let transport = MemoryHostTransport::default();
        let prefs = MemoryPrefsStore::default();
        let commands = EditorCommands::new(
            WorkspaceGateway::new(HostBridge::with_transport(transport.clone())),
            RecentFilesStore::new(prefs.clone()),
        );
        Harness {
            commands,
            transport,
            prefs,
        }
    }

    #[test]
    fn open_and_save_update_recents_most_recent_first() {
        let h = harness();
        h.transport.reply_ok("read_file", json!("alpha"));
        h.transport.reply_ok("read_file", json!("beta"));

        let opened = block_on(h.commands.open_file("a.md")).expect("open a");
        block_on(h.commands.open_file("b.md")).expect("open b");
        block_on(h.commands.save_file("a.md", "alpha v2")).expect("save a");

        assert_eq!(
            opened,
            OpenedFile {
                path: "a.md".to_string(),
                content: "alpha".to_string(),
            }
        );
        assert_eq!(
            block_on(h.commands.recents().recent_files()),
            vec!["a.md".to_string(), "b.md".to_string()]
        );
    }

    #[test]
    fn failed_open_leaves_recents_untouched() {
        let h = harness();
        h.transport.reply_err(
            "read_file",
            HostCallError::Host("Path outside workspace".to_string()),
        );

        let err = block_on(h.commands.open_file("../secret")).expect_err("host failure");

        assert_eq!(err, HostCallError::Host("Path outside workspace".to_string()));
        assert!(block_on(h.commands.recents().recent_files()).is_empty());
    }

    #[test]
    fn recents_write_failure_does_not_fail_the_save() {
        let h = harness();
        h.prefs.fail_writes_with("QuotaExceededError");

        block_on(h.commands.save_file("a.md", "text")).expect("save still succeeds");

        assert_eq!(h.transport.commands(), vec!["write_file".to_string()]);
        assert!(block_on(h.commands.recents().recent_files()).is_empty());
    }

    #[test]
    fn open_workspace_sets_root_then_lists_it() {
        let h = harness();
        h.transport
            .reply_ok("plugin:dialog|open", json!(["/home/me/notes", "/ignored"]));
        h.transport.reply_ok("list_dir", json!(["inbox.md", "archive"]));

        let opened = block_on(h.commands.open_workspace()).expect("open workspace");

        assert_eq!(
            opened,
            Some(OpenedWorkspace {
                root: "/home/me/notes".to_string(),
                entries: vec!["inbox.md".to_string(), "archive".to_string()],
            })
        );
        assert_eq!(
            h.transport.calls()[1..].to_vec(),
            vec![
                HostCall {
                    command: "set_workspace".to_string(),
                    args: json!({ "path": "/home/me/notes" }),
                },
                HostCall {
                    command: "list_dir".to_string(),
                    args: json!({ "path": "" }),
                },
            ]
        );
    }

    #[test]
    fn cancelled_picker_changes_nothing() {
        let h = harness();

        assert_eq!(block_on(h.commands.open_workspace()).expect("cancel"), None);
        assert_eq!(
            h.transport.commands(),
            vec!["plugin:dialog|open".to_string()]
        );
    }
}
