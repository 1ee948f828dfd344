//! Bridge binding: one resolved transport behind a typed remote-call primitive.

use std::{cell::OnceCell, fmt, rc::Rc};

use platform_host::{call_with, HostCallError, HostTransport};
use serde::{de::DeserializeOwned, Serialize};

use crate::adapters::host_transport;

#[derive(Clone)]
/// Typed remote-call primitive over an injected [`HostTransport`].
///
/// The transport is fixed at construction; clones share it.
pub struct HostBridge {
    transport: Rc<dyn HostTransport>,
}

impl HostBridge {
    /// Binds to an already shared transport.
    pub fn new(transport: Rc<dyn HostTransport>) -> Self {
        Self { transport }
    }

    /// Binds to `transport`.
    pub fn with_transport<T: HostTransport + 'static>(transport: T) -> Self {
        Self::new(Rc::new(transport))
    }

    /// Binds to the transport selected by the build's host strategy.
    pub fn detect() -> Self {
        Self::with_transport(host_transport())
    }

    /// Returns whether calls reach a real host.
    pub fn is_attached(&self) -> bool {
        self.transport.is_attached()
    }

    /// Returns the bound transport.
    pub fn transport(&self) -> &dyn HostTransport {
        self.transport.as_ref()
    }

    /// Invokes `command` with `args` and deserializes the reply.
    ///
    /// # Errors
    ///
    /// Host and transport failures are returned unchanged; wire-shape problems are reported as
    /// encode/decode errors.
    pub async fn call<A, T>(&self, command: &str, args: &A) -> Result<T, HostCallError>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        call_with(self.transport.as_ref(), command, args).await
    }
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("attached", &self.is_attached())
            .finish()
    }
}

thread_local! {
    static SHARED_BRIDGE: OnceCell<HostBridge> = const { OnceCell::new() };
}

/// Returns the process-wide bridge, binding it on first use.
pub fn shared_bridge() -> HostBridge {
    SHARED_BRIDGE.with(|cell| cell.get_or_init(HostBridge::detect).clone())
}
