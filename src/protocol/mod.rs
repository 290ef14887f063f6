//! Protocol Module
//!
//! Defines the fixed-layout wire exchange with the SMC service.
//!
//! ## Exchange Shape
//!
//! Every operation is a single structured call carrying the same param
//! struct in both directions: the caller fills in the key and the operation
//! selector, the service overwrites the output buffer in place and reports
//! the outcome in the result/status bytes.
//!
//! ```text
//! ┌─────────────┬────────────────────┬──────────────┬───────────────┐
//! │  key (u32)  │ vers/plimit/keyinfo│ result/status│  bytes (32)   │
//! │             │    sub-records     │ /selector    │               │
//! └─────────────┴────────────────────┴──────────────┴───────────────┘
//! ```
//!
//! ### Operation Codes
//! - 0: open-client
//! - 1: close-client
//! - 2: handle-event (the kernel method all key operations go through)
//! - 5: read-key
//! - 6: write-key
//! - 7: get-key-count
//! - 8: get-key-by-index
//! - 9: get-key-info
//!
//! The read path uses get-key-info (size/type metadata) followed by
//! read-key (raw bytes, echoing the size from the first phase).

mod key;
mod selector;
mod param;
mod codec;

pub use key::{SmcKey, DATA_TYPE_SP78, INVALID_KEY};
pub use selector::Selector;
pub use param::{KeyInfo, PLimitData, ParamStruct, Vers};
pub use codec::{pack_param, unpack_param, PARAM_STRUCT_SIZE};
