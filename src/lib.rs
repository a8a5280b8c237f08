//! Native side of `com.kmagick.KMagick`.
//!
//! The library answers the same capability queries whether or not the real
//! image-processing backend was linked. Without it (the default build) the
//! [`backend::Fallback`] backend reports the sentinel version
//! [`identity::SENTINEL_VERSION`] and warns on every version query. Build with
//! the `native` feature to link the real backend, and with `android` for the
//! JNI exports.

pub mod backend;
pub mod bridge;
pub mod config;
pub mod ffi;
pub mod identity;
pub mod logging;

#[cfg(feature = "android")]
mod jni;

pub use backend::{Backend, Fallback, Linked};
pub use bridge::{linked, CapabilityBridge};
pub use config::LoggingConfig;
pub use identity::{BuildIdentity, SENTINEL_VERSION};
pub use logging::{FacadeSink, LogSink};
