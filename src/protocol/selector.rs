//! Operation selectors
//!
//! The operation codes of the SMC exchange. Open/close/handle-event are
//! kernel method indexes; the rest are key operations carried in the param
//! struct's selector byte and dispatched through handle-event.

/// Operation selector codes (literal wire contract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Selector {
    OpenClient = 0,
    CloseClient = 1,
    HandleEvent = 2,
    ReadKey = 5,
    WriteKey = 6,
    GetKeyCount = 7,
    GetKeyByIndex = 8,
    GetKeyInfo = 9,
}
