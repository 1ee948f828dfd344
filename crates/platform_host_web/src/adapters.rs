use platform_host::{
    HostCallError, HostStrategy, HostTransport, HostTransportFuture, RecentFilesStore,
};
use serde_json::Value;

use crate::{NoopHostTransport, TauriHostTransport, WebPrefsStore};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "features `desktop-host-stub` and `desktop-host-tauri` are mutually exclusive; enable only one"
);

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-tauri")]
    {
        HostStrategy::DesktopTauri
    }

    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(any(feature = "desktop-host-stub", feature = "desktop-host-tauri")))]
    {
        HostStrategy::Detect
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete transport behind [`HostTransport`].
#[derive(Debug, Clone, Copy)]
pub enum HostTransportAdapter {
    /// Tauri IPC transport.
    DesktopTauri(TauriHostTransport),
    /// No-op transport for contexts without a host.
    DesktopStub(NoopHostTransport),
}

impl HostTransport for HostTransportAdapter {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> HostTransportFuture<'a, Result<Value, HostCallError>> {
        match self {
            Self::DesktopTauri(transport) => transport.invoke(command, args),
            Self::DesktopStub(transport) => transport.invoke(command, args),
        }
    }

    fn is_attached(&self) -> bool {
        match self {
            Self::DesktopTauri(transport) => transport.is_attached(),
            Self::DesktopStub(transport) => transport.is_attached(),
        }
    }
}

/// Resolves the transport for the selected host strategy.
///
/// Under [`HostStrategy::Detect`] the Tauri transport is chosen only when a host is attached.
pub fn host_transport() -> HostTransportAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopTauri => HostTransportAdapter::DesktopTauri(TauriHostTransport),
        HostStrategy::DesktopStub => HostTransportAdapter::DesktopStub(NoopHostTransport),
        HostStrategy::Detect => {
            if crate::bridge::host_attached() {
                HostTransportAdapter::DesktopTauri(TauriHostTransport)
            } else {
                leptos::logging::log!("no host attached; remote calls bound to the no-op stub");
                HostTransportAdapter::DesktopStub(NoopHostTransport)
            }
        }
    }
}

/// Returns the durable preference store for the active build.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Returns the recent files list over the active build's preference store.
pub fn recent_files_store() -> RecentFilesStore<WebPrefsStore> {
    RecentFilesStore::new(prefs_store())
}
