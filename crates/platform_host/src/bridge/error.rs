//! Failure taxonomy for host remote calls.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors surfaced by a [`crate::HostTransport`] round trip.
///
/// Host-reported failures keep the host's message text verbatim; this layer never interprets or
/// retries them.
pub enum HostCallError {
    /// The host executed the command and reported a failure (bad path, permission, ...).
    #[error("{0}")]
    Host(String),
    /// The IPC channel itself rejected the call before the host could answer.
    #[error("host transport failed: {0}")]
    Transport(String),
    /// Arguments could not be encoded for the wire.
    #[error("failed to encode arguments for `{command}`: {message}")]
    Encode {
        /// Wire command being invoked.
        command: String,
        /// Serializer error text.
        message: String,
    },
    /// The host answered with a payload that does not match the expected result shape.
    #[error("unexpected result from `{command}`: {message}")]
    Decode {
        /// Wire command that produced the payload.
        command: String,
        /// Deserializer error text.
        message: String,
    },
}

impl HostCallError {
    /// Returns whether the failure was reported by the host rather than the bridge plumbing.
    pub const fn is_host_reported(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_failures_display_verbatim() {
        let err = HostCallError::Host("Path outside workspace".to_string());
        assert_eq!(err.to_string(), "Path outside workspace");
        assert!(err.is_host_reported());
    }

    #[test]
    fn plumbing_failures_name_the_command() {
        let err = HostCallError::Decode {
            command: "list_dir".to_string(),
            message: "invalid type".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected result from `list_dir`: invalid type"
        );
        assert!(!err.is_host_reported());
    }
}
