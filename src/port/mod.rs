//! Port Module
//!
//! The communication channel to the hardware-management service.
//!
//! ## Architecture
//! - `SmcPort`: the seam between protocol stages and the OS connection
//! - `IoKitPort`: the native backend (macOS), one kernel connection per open
//! - Tests substitute scripted ports through the same trait

use crate::protocol::ParamStruct;

#[cfg(target_os = "macos")]
mod iokit;

#[cfg(target_os = "macos")]
pub use iokit::IoKitPort;

/// A single open channel to the SMC service.
///
/// One `call` is exactly one blocking structured exchange of fixed input
/// and output size; the service overwrites the output in place. There is no
/// retry, no timeout and no cancellation path: an unresponsive service
/// stalls the calling thread. Implementations are not internally
/// synchronized; callers serialize concurrent use externally.
pub trait SmcPort {
    /// Perform one structured call.
    ///
    /// A failure of the call itself (as opposed to a non-success status
    /// inside the response) surfaces as the normalized kernel error code.
    fn call(&mut self, input: &ParamStruct) -> std::result::Result<ParamStruct, i32>;
}

/// Unwrap the Mach error packaging to expose the root cause.
///
/// Kernel return values pack system (bits 26-31), subsystem (bits 14-25)
/// and code (bits 0-13) into one value; the code field is the part worth
/// reporting.
pub fn normalize_error(raw: i32) -> i32 {
    raw & 0x3fff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_extracts_code_field() {
        // 0xe00002c2: iokit system/sub packaging around code 0x2c2
        assert_eq!(normalize_error(0xe00002c2u32 as i32), 0x2c2);
        // Codes that fit the field pass through untouched
        assert_eq!(normalize_error(0x2c2), 0x2c2);
        assert_eq!(normalize_error(0), 0);
    }
}
