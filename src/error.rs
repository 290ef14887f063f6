//! Error types for smckit
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SmcError
pub type Result<T> = std::result::Result<T, SmcError>;

/// Unified error type for SMC operations
#[derive(Debug, Error)]
pub enum SmcError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// The structured call itself failed. Carries the normalized kernel
    /// error code (the root-cause code field, not the packed Mach value).
    #[error("Transport call failed: kernel code {0:#x}")]
    Transport(i32),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The call completed but the service reported a non-success result,
    /// including key-not-found.
    #[error("Protocol error: result {result:#04x}, status {status:#04x}")]
    ProtocolStatus { result: u8, status: u8 },

    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("Invalid key {0:?}: keys are exactly 4 ASCII characters")]
    InvalidKey(String),
}
