//! Client Module
//!
//! The two-phase read path over an open port.
//!
//! ## Read Sequence
//! 1. get-key-info: size/type metadata for the key
//! 2. read-key: raw bytes, echoing the size from phase one
//! 3. decode: interpret the buffer under the key's type tag
//!
//! A failed first phase is terminal; the second phase is never attempted
//! without the first phase's size. Nothing is cached between reads: every
//! read re-executes both phases.

use crate::error::{Result, SmcError};
use crate::port::SmcPort;
use crate::protocol::{KeyInfo, ParamStruct, Selector, SmcKey};

#[cfg(target_os = "macos")]
use crate::config::Config;
#[cfg(target_os = "macos")]
use crate::port::IoKitPort;

/// Result byte the service sets on success
const RESULT_SUCCESS: u8 = 0;

/// Client for the SMC sensor-telemetry protocol.
///
/// Owns its port; stages borrow it, so mock ports slot in for tests and
/// exactly one live connection backs all reads. Not internally
/// synchronized: callers issue one request at a time per client, or open
/// independent clients.
pub struct SmcClient<P: SmcPort> {
    port: P,
}

#[cfg(target_os = "macos")]
impl SmcClient<IoKitPort> {
    /// Open a client against the default service.
    pub fn open() -> Result<Self> {
        Self::open_with(&Config::default())
    }

    /// Open a client against the service named in `config`.
    pub fn open_with(config: &Config) -> Result<Self> {
        Ok(Self::with_port(IoKitPort::open(config)?))
    }

    /// Release the underlying connection.
    pub fn close(self) {
        self.port.close();
    }
}

impl<P: SmcPort> SmcClient<P> {
    /// Build a client over any port implementation.
    pub fn with_port(port: P) -> Self {
        Self { port }
    }

    /// Phase one: query size/type/attribute metadata for `key`.
    pub fn query_key_info(&mut self, key: SmcKey) -> Result<KeyInfo> {
        let request = ParamStruct::request(Selector::GetKeyInfo, key);
        let response = self.call_checked(&request)?;
        tracing::trace!(
            %key,
            size = response.key_info.data_size,
            data_type = %response.key_info.data_type_display(),
            "key info"
        );
        Ok(response.key_info)
    }

    /// Phase two: read the raw value bytes for `key`.
    ///
    /// `size` must be the data size reported by `query_key_info`; the
    /// service needs it echoed back to know how much of the 32-byte buffer
    /// is meaningful. The buffer is returned verbatim; only the first
    /// `size` bytes carry defined data.
    pub fn read_raw(&mut self, key: SmcKey, size: u32) -> Result<[u8; 32]> {
        let mut request = ParamStruct::request(Selector::ReadKey, key);
        request.key_info.data_size = size;
        let response = self.call_checked(&request)?;
        Ok(response.bytes)
    }

    /// Read a temperature sensor, collapsing every failure to 0.0.
    ///
    /// Known quirk, kept for compatibility: an invalid key, a transport
    /// failure and a non-success protocol status are all reported as 0.0,
    /// indistinguishable from a legitimate zero-degree reading. Callers
    /// that need to tell failures apart use `query_key_info`/`read_raw`
    /// directly.
    pub fn read_temperature(&mut self, key: &str) -> f64 {
        let key = match SmcKey::new(key) {
            Ok(key) => key,
            Err(_) => return 0.0,
        };
        let info = match self.query_key_info(key) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!(%key, error = %e, "no reading available");
                return 0.0;
            }
        };
        let raw = match self.read_raw(key, info.data_size) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(%key, error = %e, "value read failed");
                return 0.0;
            }
        };
        decode_reading(&info, &raw)
    }

    /// Issue one transport call and check the response's result byte.
    fn call_checked(&mut self, request: &ParamStruct) -> Result<ParamStruct> {
        let response = self.port.call(request).map_err(SmcError::Transport)?;
        if response.result != RESULT_SUCCESS {
            return Err(SmcError::ProtocolStatus {
                result: response.result,
                status: response.status,
            });
        }
        Ok(response)
    }
}

/// Decode a raw value under its key-info type tag.
///
/// The rule for the fixed-point temperature family (`sp78` and friends):
/// the first byte is the integer part of the reading. The fractional byte
/// is not incorporated.
pub fn decode_reading(info: &KeyInfo, raw: &[u8; 32]) -> f64 {
    tracing::trace!(
        data_type = %info.data_type_display(),
        size = info.data_size,
        "decoding reading"
    );
    f64::from(raw[0])
}
