//! IOKit port backend (macOS)
//!
//! Locates the SMC service in the IO registry by its fixed name and opens a
//! user-client connection to it. All key operations go through the
//! handle-event kernel method, with the operation code carried in the param
//! struct's selector byte.

use std::ffi::CString;
use std::os::raw::{c_char, c_void};

use crate::config::Config;
use crate::error::{Result, SmcError};
use crate::protocol::{pack_param, unpack_param, ParamStruct, Selector, PARAM_STRUCT_SIZE};

use super::{normalize_error, SmcPort};

type KernReturn = i32;
type MachPort = u32;
type IoObject = u32;
type IoConnect = u32;

const KERN_SUCCESS: KernReturn = 0;

/// The null port selects the default main port for registry lookups.
const MAIN_PORT_DEFAULT: MachPort = 0;

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    fn IOServiceMatching(name: *const c_char) -> *mut c_void;
    fn IOServiceGetMatchingService(main_port: MachPort, matching: *mut c_void) -> IoObject;
    fn IOServiceOpen(
        service: IoObject,
        owning_task: MachPort,
        conn_type: u32,
        connect: *mut IoConnect,
    ) -> KernReturn;
    fn IOServiceClose(connect: IoConnect) -> KernReturn;
    fn IOObjectRelease(object: IoObject) -> KernReturn;
    fn IOConnectCallStructMethod(
        connection: IoConnect,
        selector: u32,
        input: *const c_void,
        input_size: usize,
        output: *mut c_void,
        output_size: *mut usize,
    ) -> KernReturn;

    static mach_task_self_: MachPort;
}

/// An open user-client connection to the SMC service.
///
/// Opening and closing the kernel connection is expensive; the intended
/// usage is one port per process, shared by all reads and serialized by the
/// caller.
pub struct IoKitPort {
    connection: IoConnect,
    closed: bool,
}

impl IoKitPort {
    /// Locate the service named in `config` and open a connection to it.
    ///
    /// No matching service instance is a hard `ServiceNotFound` failure; no
    /// handle exists in that case.
    pub fn open(config: &Config) -> Result<Self> {
        let name = CString::new(config.service_name.as_str())
            .map_err(|_| SmcError::ServiceNotFound(config.service_name.clone()))?;

        // SAFETY: IOServiceMatching copies the name; the returned matching
        // dictionary is consumed by IOServiceGetMatchingService.
        let service = unsafe {
            let matching = IOServiceMatching(name.as_ptr());
            IOServiceGetMatchingService(MAIN_PORT_DEFAULT, matching)
        };
        if service == 0 {
            return Err(SmcError::ServiceNotFound(config.service_name.clone()));
        }

        let mut connection: IoConnect = 0;
        // SAFETY: `service` is a live registry entry; released right after
        // the open regardless of outcome.
        let kr = unsafe {
            let kr = IOServiceOpen(
                service,
                mach_task_self_,
                config.user_client_type,
                &mut connection,
            );
            IOObjectRelease(service);
            kr
        };
        if kr != KERN_SUCCESS {
            return Err(SmcError::Transport(normalize_error(kr)));
        }

        tracing::debug!(service = %config.service_name, connection, "opened SMC connection");
        Ok(Self {
            connection,
            closed: false,
        })
    }

    /// Release the connection. At most one close per successful open; drop
    /// covers the case where this is never called.
    pub fn close(mut self) {
        self.close_inner();
    }

    fn close_inner(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        // SAFETY: `connection` came from a successful IOServiceOpen and the
        // `closed` flag guarantees a single close.
        let kr = unsafe { IOServiceClose(self.connection) };
        if kr != KERN_SUCCESS {
            tracing::warn!(code = normalize_error(kr), "IOServiceClose failed");
        } else {
            tracing::debug!(connection = self.connection, "closed SMC connection");
        }
    }
}

impl SmcPort for IoKitPort {
    fn call(&mut self, input: &ParamStruct) -> std::result::Result<ParamStruct, i32> {
        let packed = pack_param(input);
        let mut output = [0u8; PARAM_STRUCT_SIZE];
        let mut output_size = PARAM_STRUCT_SIZE;

        // SAFETY: input and output buffers are exactly PARAM_STRUCT_SIZE
        // bytes and outlive the blocking call; the service overwrites the
        // output in place.
        let kr = unsafe {
            IOConnectCallStructMethod(
                self.connection,
                Selector::HandleEvent as u32,
                packed.as_ptr() as *const c_void,
                packed.len(),
                output.as_mut_ptr() as *mut c_void,
                &mut output_size,
            )
        };
        if kr != KERN_SUCCESS {
            return Err(normalize_error(kr));
        }

        Ok(unpack_param(&output))
    }
}

impl Drop for IoKitPort {
    fn drop(&mut self) {
        self.close_inner();
    }
}
