//! The capability queries a managed caller can make.

use log::Level;

use crate::backend::{Backend, Linked};
use crate::logging::{FacadeSink, LogSink};

/// Logged on every version query while the fallback backend is linked.
pub const FALLBACK_WARNING: &str =
    "Using dummy kmagick implementation. Please build the Rust library first.";

static LINKED: CapabilityBridge<Linked, FacadeSink> = CapabilityBridge::new(Linked {}, FacadeSink);

/// The process-wide bridge over the backend this library was built with.
pub fn linked() -> &'static CapabilityBridge<Linked, FacadeSink> {
    &LINKED
}

/// Answers capability queries the same way whether or not the real
/// backend is present.
#[derive(Debug)]
pub struct CapabilityBridge<B, S> {
    backend: B,
    sink: S,
}

impl<B: Backend, S: LogSink> CapabilityBridge<B, S> {
    pub const fn new(backend: B, sink: S) -> Self {
        Self { backend, sink }
    }

    /// Version of the linked backend, or the sentinel in fallback mode.
    ///
    /// In fallback mode each call also sends one warning to the sink.
    pub fn get_version(&self) -> &'static str {
        let identity = self.backend.identity();
        if identity.is_fallback() {
            self.sink
                .log(Level::Warn, self.backend.log_tag(), FALLBACK_WARNING);
        }
        identity.version()
    }

    pub fn is_fallback_implementation(&self) -> bool {
        self.backend.identity().is_fallback()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
