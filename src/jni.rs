//! JNI bindings for `com.kmagick.KMagick`
//!
//! Marshalling only: every answer comes from [`crate::bridge::linked`].

#![allow(non_snake_case)]

use std::ffi::c_void;
use std::ptr;

use anyhow::Context;
use jni::objects::JObject;
use jni::sys::{jboolean, jint, jstring, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::backend::Backend;
use crate::bridge;
use crate::config::LoggingConfig;
use crate::logging;

fn java_string(env: &mut JNIEnv, value: &str) -> anyhow::Result<jstring> {
    let string = env
        .new_string(value)
        .context("failed to allocate Java string")?;
    Ok(string.into_raw())
}

/// Installs the platform logger when the JVM loads the library.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::install(&LoggingConfig::default());
    let identity = bridge::linked().backend().identity();
    log::info!(
        "kmagick bridge loaded (version {}, fallback: {})",
        identity.version(),
        identity.is_fallback()
    );
    JNI_VERSION_1_6
}

/// Get version string via JNI
///
/// Returns null only if the JVM could not allocate the string, in which case
/// an `OutOfMemoryError` is already pending.
#[no_mangle]
pub extern "system" fn Java_com_kmagick_KMagick_getDummyVersion(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    let version = bridge::linked().get_version();
    java_string(&mut env, version).unwrap_or_else(|err| {
        log::error!("getDummyVersion: {err:#}");
        ptr::null_mut()
    })
}

#[no_mangle]
pub extern "system" fn Java_com_kmagick_KMagick_isDummyImplementation(
    _env: JNIEnv,
    _this: JObject,
) -> jboolean {
    if bridge::linked().is_fallback_implementation() {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}
