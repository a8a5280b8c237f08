//! C ABI for hosts that load the library without a JVM.
//!
//! Failures never cross the boundary: they are logged and reported as a null
//! pointer or `false`.

use std::ffi::{CStr, CString};
use std::ptr;
use std::sync::OnceLock;

use anyhow::Context;
use libc::c_char;

use crate::backend::Backend;
use crate::bridge;
use crate::config::LoggingConfig;
use crate::logging;

static VERSION: OnceLock<CString> = OnceLock::new();

fn version_c_str(version: &str) -> anyhow::Result<&'static CStr> {
    if let Some(cached) = VERSION.get() {
        return Ok(cached.as_c_str());
    }
    let owned = CString::new(version).context("version contains a NUL byte")?;
    Ok(VERSION.get_or_init(|| owned).as_c_str())
}

fn identity_json() -> anyhow::Result<CString> {
    let identity = bridge::linked().backend().identity();
    let json = serde_json::to_string(identity).context("failed to serialize identity")?;
    CString::new(json).context("identity JSON contains a NUL byte")
}

unsafe fn logging_config(config_json: *const c_char) -> anyhow::Result<LoggingConfig> {
    if config_json.is_null() {
        return Ok(LoggingConfig::default());
    }
    let json = CStr::from_ptr(config_json)
        .to_str()
        .context("logging config is not UTF-8")?;
    LoggingConfig::from_json(json)
}

/// Version string of the linked backend. The pointer is static; do not free it.
#[no_mangle]
pub extern "C" fn kmagick_version() -> *const c_char {
    match version_c_str(bridge::linked().get_version()) {
        Ok(version) => version.as_ptr(),
        Err(err) => {
            log::error!("kmagick_version: {err:#}");
            ptr::null()
        }
    }
}

#[no_mangle]
pub extern "C" fn kmagick_is_fallback() -> bool {
    bridge::linked().is_fallback_implementation()
}

/// Identity as `{"version": ..., "is_fallback": ...}`.
/// Release with [`kmagick_string_free`].
#[no_mangle]
pub extern "C" fn kmagick_identity_json() -> *mut c_char {
    match identity_json() {
        Ok(json) => json.into_raw(),
        Err(err) => {
            log::error!("kmagick_identity_json: {err:#}");
            ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `s` must be null or a pointer returned by [`kmagick_identity_json`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn kmagick_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Installs the platform logger. A null `config_json` uses the defaults.
///
/// # Safety
///
/// `config_json` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn kmagick_init_logging(config_json: *const c_char) -> bool {
    match logging_config(config_json) {
        Ok(config) => {
            logging::install(&config);
            true
        }
        Err(err) => {
            log::error!("kmagick_init_logging: {err:#}");
            false
        }
    }
}
