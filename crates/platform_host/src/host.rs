//! Host strategy tokens shared by transport selection and diagnostics.

/// Strategy used to bind the remote-call transport for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Bind to the Tauri IPC transport when a host is attached, otherwise to the no-op stub.
    Detect,
    /// Always bind to the Tauri IPC transport.
    DesktopTauri,
    /// Always bind to the no-op stub (rendering without a host).
    DesktopStub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detect => "detect",
            Self::DesktopTauri => "desktop-tauri",
            Self::DesktopStub => "desktop-stub",
        }
    }
}

impl std::fmt::Display for HostStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
