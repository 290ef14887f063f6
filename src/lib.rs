//! # smckit
//!
//! Client for the SMC sensor-telemetry protocol:
//! - 4-character sensor keys packed bijectively into u32
//! - a fixed 74-byte param struct, serialized at explicit byte offsets
//! - two-phase reads: key metadata lookup, then raw value read
//! - typed decoding of the raw buffer into a numeric reading
//!
//! ## Architecture Overview
//!
//! ```text
//!   SmcClient::read_temperature(key)
//!          │
//!   ┌──────▼────────┐   get-key-info    ┌──────────────┐
//!   │ KeyInfo stage │ ────────────────▶ │              │
//!   └──────┬────────┘                   │   SmcPort    │──▶ SMC service
//!   ┌──────▼────────┐     read-key      │ (one struct  │
//!   │  Read stage   │ ────────────────▶ │  call each)  │
//!   └──────┬────────┘                   └──────────────┘
//!   ┌──────▼────────┐
//!   │    Decoder    │ ──▶ f64 reading
//!   └───────────────┘
//! ```
//!
//! Every read is a single synchronous call chain with no internal
//! concurrency; one opened client is meant to be shared per process, with
//! callers serializing access.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod port;
pub mod client;
pub mod keys;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SmcError};
pub use config::Config;
pub use client::SmcClient;
pub use protocol::{KeyInfo, Selector, SmcKey};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of smckit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
