//! Param struct codec
//!
//! Explicit byte-offset serialization for the wire exchange. The service
//! expects this exact layout; nothing here relies on native struct layout,
//! and there is no implicit padding anywhere. Multi-byte fields are
//! little-endian, the byte order of the platforms hosting the service.
//!
//! ## Wire Layout
//! ```text
//! ┌────────┬──────┬──────────────────────────────┐
//! │ offset │ size │ field                        │
//! ├────────┼──────┼──────────────────────────────┤
//! │ 0      │ 4    │ key                          │
//! │ 4      │ 1    │ vers.major                   │
//! │ 5      │ 1    │ vers.minor                   │
//! │ 6      │ 1    │ vers.build                   │
//! │ 7      │ 1    │ vers.reserved                │
//! │ 8      │ 2    │ vers.release                 │
//! │ 10     │ 2    │ plimit.version               │
//! │ 12     │ 2    │ plimit.length                │
//! │ 14     │ 4    │ plimit.cpu_plimit            │
//! │ 18     │ 4    │ plimit.gpu_plimit            │
//! │ 22     │ 4    │ plimit.mem_plimit            │
//! │ 26     │ 4    │ key_info.data_size           │
//! │ 30     │ 4    │ key_info.data_type           │
//! │ 34     │ 1    │ key_info.data_attributes     │
//! │ 35     │ 1    │ result                       │
//! │ 36     │ 1    │ status                       │
//! │ 37     │ 1    │ selector                     │
//! │ 38     │ 4    │ data32                       │
//! │ 42     │ 32   │ bytes                        │
//! └────────┴──────┴──────────────────────────────┘
//! ```

use super::param::{KeyInfo, PLimitData, ParamStruct, Vers};

/// Serialized size of the param struct; identical for every instance.
pub const PARAM_STRUCT_SIZE: usize = 74;

// Field offsets in the packed layout
const OFF_KEY: usize = 0;
const OFF_VERS_MAJOR: usize = 4;
const OFF_VERS_MINOR: usize = 5;
const OFF_VERS_BUILD: usize = 6;
const OFF_VERS_RESERVED: usize = 7;
const OFF_VERS_RELEASE: usize = 8;
const OFF_PLIMIT_VERSION: usize = 10;
const OFF_PLIMIT_LENGTH: usize = 12;
const OFF_PLIMIT_CPU: usize = 14;
const OFF_PLIMIT_GPU: usize = 18;
const OFF_PLIMIT_MEM: usize = 22;
const OFF_KEYINFO_SIZE: usize = 26;
const OFF_KEYINFO_TYPE: usize = 30;
const OFF_KEYINFO_ATTRS: usize = 34;
const OFF_RESULT: usize = 35;
const OFF_STATUS: usize = 36;
const OFF_SELECTOR: usize = 37;
const OFF_DATA32: usize = 38;
const OFF_BYTES: usize = 42;

/// Serialize a param struct into its fixed wire layout
pub fn pack_param(param: &ParamStruct) -> [u8; PARAM_STRUCT_SIZE] {
    let mut buf = [0u8; PARAM_STRUCT_SIZE];

    put_u32(&mut buf, OFF_KEY, param.key);

    buf[OFF_VERS_MAJOR] = param.vers.major;
    buf[OFF_VERS_MINOR] = param.vers.minor;
    buf[OFF_VERS_BUILD] = param.vers.build;
    buf[OFF_VERS_RESERVED] = param.vers.reserved;
    put_u16(&mut buf, OFF_VERS_RELEASE, param.vers.release);

    put_u16(&mut buf, OFF_PLIMIT_VERSION, param.plimit.version);
    put_u16(&mut buf, OFF_PLIMIT_LENGTH, param.plimit.length);
    put_u32(&mut buf, OFF_PLIMIT_CPU, param.plimit.cpu_plimit);
    put_u32(&mut buf, OFF_PLIMIT_GPU, param.plimit.gpu_plimit);
    put_u32(&mut buf, OFF_PLIMIT_MEM, param.plimit.mem_plimit);

    put_u32(&mut buf, OFF_KEYINFO_SIZE, param.key_info.data_size);
    put_u32(&mut buf, OFF_KEYINFO_TYPE, param.key_info.data_type);
    buf[OFF_KEYINFO_ATTRS] = param.key_info.data_attributes;

    buf[OFF_RESULT] = param.result;
    buf[OFF_STATUS] = param.status;
    buf[OFF_SELECTOR] = param.selector;
    put_u32(&mut buf, OFF_DATA32, param.data32);

    buf[OFF_BYTES..OFF_BYTES + 32].copy_from_slice(&param.bytes);

    buf
}

/// Deserialize a param struct from its fixed wire layout
pub fn unpack_param(buf: &[u8; PARAM_STRUCT_SIZE]) -> ParamStruct {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&buf[OFF_BYTES..OFF_BYTES + 32]);

    ParamStruct {
        key: get_u32(buf, OFF_KEY),
        vers: Vers {
            major: buf[OFF_VERS_MAJOR],
            minor: buf[OFF_VERS_MINOR],
            build: buf[OFF_VERS_BUILD],
            reserved: buf[OFF_VERS_RESERVED],
            release: get_u16(buf, OFF_VERS_RELEASE),
        },
        plimit: PLimitData {
            version: get_u16(buf, OFF_PLIMIT_VERSION),
            length: get_u16(buf, OFF_PLIMIT_LENGTH),
            cpu_plimit: get_u32(buf, OFF_PLIMIT_CPU),
            gpu_plimit: get_u32(buf, OFF_PLIMIT_GPU),
            mem_plimit: get_u32(buf, OFF_PLIMIT_MEM),
        },
        key_info: KeyInfo {
            data_size: get_u32(buf, OFF_KEYINFO_SIZE),
            data_type: get_u32(buf, OFF_KEYINFO_TYPE),
            data_attributes: buf[OFF_KEYINFO_ATTRS],
        },
        result: buf[OFF_RESULT],
        status: buf[OFF_STATUS],
        selector: buf[OFF_SELECTOR],
        data32: get_u32(buf, OFF_DATA32),
        bytes,
    }
}

fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn get_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn get_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}
