//! Remote-call contracts for reaching the host process across the privilege boundary.

pub mod error;
pub mod transport;
