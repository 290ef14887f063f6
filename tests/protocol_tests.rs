//! Protocol Tests
//!
//! Key packing and param struct layout verification.

use smckit::protocol::{
    pack_param, unpack_param, ParamStruct, Selector, SmcKey, INVALID_KEY, PARAM_STRUCT_SIZE,
};

// =============================================================================
// Key Packing Tests
// =============================================================================

#[test]
fn test_encode_known_key() {
    // T=0x54, C=0x43, '0'=0x30, P=0x50, packed MSB-first
    assert_eq!(SmcKey::encode("TC0P"), 0x5443_3050);
    assert_eq!(SmcKey::encode("TC0P"), 1_413_689_424);
}

#[test]
fn test_encode_wrong_length_is_sentinel() {
    for bad in ["", "T", "TC", "TC0", "TC0PX", "TC0PXY"] {
        assert_eq!(SmcKey::encode(bad), INVALID_KEY, "key {bad:?}");
    }
}

#[test]
fn test_key_round_trip() {
    for key in ["TC0P", "TA0P", "TB2T", "TW0P", "sp78", "fpe2"] {
        let packed = SmcKey::new(key).unwrap();
        assert_eq!(packed.to_string(), key);
    }
}

#[test]
fn test_from_code_round_trip() {
    let key = SmcKey::new("TG0D").unwrap();
    assert_eq!(SmcKey::from_code(key.code()), key);
}

// =============================================================================
// Selector Code Tests
// =============================================================================

#[test]
fn test_selector_codes_are_the_wire_contract() {
    assert_eq!(Selector::OpenClient as u8, 0);
    assert_eq!(Selector::CloseClient as u8, 1);
    assert_eq!(Selector::HandleEvent as u8, 2);
    assert_eq!(Selector::ReadKey as u8, 5);
    assert_eq!(Selector::WriteKey as u8, 6);
    assert_eq!(Selector::GetKeyCount as u8, 7);
    assert_eq!(Selector::GetKeyByIndex as u8, 8);
    assert_eq!(Selector::GetKeyInfo as u8, 9);
}

// =============================================================================
// Param Layout Tests
// =============================================================================

/// A param struct with every field set to a distinctive value.
fn filled_param() -> ParamStruct {
    let mut param = ParamStruct::request(
        Selector::GetKeyInfo,
        SmcKey::new("TC0P").unwrap(),
    );
    param.vers.major = 2;
    param.vers.minor = 3;
    param.vers.build = 15;
    param.vers.reserved = 0;
    param.vers.release = 0x0102;
    param.plimit.version = 1;
    param.plimit.length = 16;
    param.plimit.cpu_plimit = 0x0a0b_0c0d;
    param.plimit.gpu_plimit = 0x1a1b_1c1d;
    param.plimit.mem_plimit = 0x2a2b_2c2d;
    param.key_info.data_size = 2;
    param.key_info.data_type = SmcKey::encode("sp78");
    param.key_info.data_attributes = 0x40;
    param.result = 0x84;
    param.status = 0x01;
    param.data32 = 0xdead_beef;
    param.bytes[0] = 0x2a;
    param.bytes[31] = 0xff;
    param
}

#[test]
fn test_layout_size_is_constant() {
    let zeroed = pack_param(&ParamStruct::default());
    let filled = pack_param(&filled_param());

    assert_eq!(zeroed.len(), PARAM_STRUCT_SIZE);
    assert_eq!(filled.len(), PARAM_STRUCT_SIZE);
    assert_eq!(PARAM_STRUCT_SIZE, 74);
}

#[test]
fn test_wire_offsets() {
    let packed = pack_param(&filled_param());

    // key at 0, little-endian bytes of 0x54433050
    assert_eq!(&packed[0..4], &[0x50, 0x30, 0x43, 0x54]);
    // vers at 4: major, minor, build, reserved, release (u16)
    assert_eq!(&packed[4..8], &[2, 3, 15, 0]);
    assert_eq!(&packed[8..10], &[0x02, 0x01]);
    // plimit at 10: version, length, cpu/gpu/mem limits
    assert_eq!(&packed[10..12], &[1, 0]);
    assert_eq!(&packed[12..14], &[16, 0]);
    assert_eq!(&packed[14..18], &[0x0d, 0x0c, 0x0b, 0x0a]);
    assert_eq!(&packed[18..22], &[0x1d, 0x1c, 0x1b, 0x1a]);
    assert_eq!(&packed[22..26], &[0x2d, 0x2c, 0x2b, 0x2a]);
    // key_info at 26: data_size, data_type ("sp78"), attributes
    assert_eq!(&packed[26..30], &[2, 0, 0, 0]);
    assert_eq!(&packed[30..34], &[0x38, 0x37, 0x70, 0x73]);
    assert_eq!(packed[34], 0x40);
    // result / status / selector
    assert_eq!(packed[35], 0x84);
    assert_eq!(packed[36], 0x01);
    assert_eq!(packed[37], Selector::GetKeyInfo as u8);
    // data32 and the raw buffer
    assert_eq!(&packed[38..42], &[0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(packed[42], 0x2a);
    assert_eq!(packed[73], 0xff);
}

#[test]
fn test_pack_unpack_round_trip() {
    let param = filled_param();
    let unpacked = unpack_param(&pack_param(&param));
    assert_eq!(unpacked, param);
}

#[test]
fn test_request_is_zero_initialized() {
    let key = SmcKey::new("TA0P").unwrap();
    let request = ParamStruct::request(Selector::ReadKey, key);

    let expected = ParamStruct {
        key: key.code(),
        selector: Selector::ReadKey as u8,
        ..ParamStruct::default()
    };
    assert_eq!(request, expected);
}
