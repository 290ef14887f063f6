//! Param struct definitions
//!
//! The fixed-size structure exchanged on every call. Requests and responses
//! share the layout: the service overwrites the output buffer in place and
//! fills the result/status/key-info/data fields.
//!
//! Instances are transient: zero-initialized before each call via
//! [`ParamStruct::request`], never reused across calls.

use serde::{Deserialize, Serialize};

use super::key::SmcKey;
use super::selector::Selector;

/// Version sub-record reported by the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vers {
    pub major: u8,
    pub minor: u8,
    pub build: u8,
    pub reserved: u8,
    pub release: u16,
}

/// Power-limit sub-record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PLimitData {
    pub version: u16,
    pub length: u16,
    pub cpu_plimit: u32,
    pub gpu_plimit: u32,
    pub mem_plimit: u32,
}

/// Key metadata: how to interpret a key's stored value.
///
/// Produced by the get-key-info phase and consumed immediately by the
/// read-key phase of the same logical read; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Byte size of the key's value (typically 1-32)
    pub data_size: u32,

    /// 4-character type tag, packed like a key (e.g. `sp78`)
    pub data_type: u32,

    /// Attribute flags
    pub data_attributes: u8,
}

impl KeyInfo {
    /// The type tag in its 4-character diagnostic form.
    pub fn data_type_display(&self) -> SmcKey {
        SmcKey::from_code(self.data_type)
    }
}

/// The fixed-size structure sent on every call and overwritten in place as
/// the response. See the codec for the exact byte layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamStruct {
    /// Target key in packed form
    pub key: u32,

    /// Version sub-record
    pub vers: Vers,

    /// Power-limit sub-record
    pub plimit: PLimitData,

    /// Key-info sub-record (size/type/attributes)
    pub key_info: KeyInfo,

    /// Result code set by the service (0 = success)
    pub result: u8,

    /// Status byte set by the service
    pub status: u8,

    /// Operation selector byte
    pub selector: u8,

    /// Scalar data field
    pub data32: u32,

    /// Raw data buffer; only the first `key_info.data_size` bytes of a
    /// read response carry defined data
    pub bytes: [u8; 32],
}

impl ParamStruct {
    /// A fresh zero-initialized request for one operation on one key.
    pub fn request(selector: Selector, key: SmcKey) -> Self {
        Self {
            key: key.code(),
            selector: selector as u8,
            ..Self::default()
        }
    }
}
