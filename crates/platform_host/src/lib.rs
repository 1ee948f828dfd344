//! Typed host-boundary contracts shared by the editor runtime and browser/webview adapters.
//!
//! This crate is the API-first boundary between editor UI code and the privileged host process.
//! It exposes the remote-call transport contract, the workspace wire contract (command names,
//! argument records, folder picker options), and durable preference storage with the recent
//! files list built on top of it. Concrete webview transports live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod host;
pub mod storage;
pub mod workspace;

pub use bridge::error::HostCallError;
pub use bridge::transport::{
    call_with, HostCall, HostTransport, HostTransportFuture, MemoryHostTransport,
};
pub use host::HostStrategy;
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use storage::recents::{push_recent, RecentFilesStore, MAX_RECENTS, RECENT_FILES_KEY};
pub use workspace::commands::{
    DialogOpenArgs, PathArgs, RenameArgs, WriteFileArgs, CREATE_DIR_COMMAND, DELETE_NODE_COMMAND,
    DIALOG_OPEN_COMMAND, LIST_DIR_COMMAND, READ_FILE_COMMAND, RENAME_NODE_COMMAND,
    SET_WORKSPACE_COMMAND, WRITE_FILE_COMMAND,
};
pub use workspace::picker::{normalize_folder_selection, FolderPickerOptions};
