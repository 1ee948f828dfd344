//! Webview implementations of [`platform_host`] contracts.
//!
//! This crate binds the editor to its host process: the Tauri IPC transport (with a no-op stub
//! when no host is attached), the typed [`WorkspaceGateway`] over it, and `localStorage`-backed
//! preference storage for the recent files list.
//!
//! The transport bridge lives under `bridge/`:
//! - `bridge::interop` (wasm32 Tauri glue and the non-wasm fallback)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and adapter factories for runtime wiring.
pub mod adapters;
pub mod binding;
mod bridge;
pub mod storage;
pub mod transport;
pub mod workspace;

pub use adapters::{
    host_strategy_name, host_transport, prefs_store, recent_files_store, selected_host_strategy,
    HostTransportAdapter,
};
pub use binding::{shared_bridge, HostBridge};
pub use storage::local_prefs::WebPrefsStore;
pub use transport::{NoopHostTransport, TauriHostTransport};
pub use workspace::WorkspaceGateway;
