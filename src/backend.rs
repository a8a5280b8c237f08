//! Backends the bridge can be linked against.
//!
//! Exactly one of them is [`Linked`], chosen by the `native` cargo feature.
//! Nothing in the crate branches on the backend at runtime.

use crate::identity::BuildIdentity;

/// Log tag used while running without the real backend.
pub const FALLBACK_LOG_TAG: &str = "kmagick-dummy";

/// Log tag used by the real backend.
pub const NATIVE_LOG_TAG: &str = "kmagick";

static FALLBACK_IDENTITY: BuildIdentity = BuildIdentity::fallback();

#[cfg(feature = "native")]
static NATIVE_IDENTITY: BuildIdentity = BuildIdentity::native(env!("CARGO_PKG_VERSION"));

/// What every backend must answer, linked or not.
pub trait Backend: Send + Sync {
    fn identity(&self) -> &'static BuildIdentity;

    /// Tag attached to log entries this backend produces.
    fn log_tag(&self) -> &'static str;
}

/// Stand-in used when the real backend failed to build.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fallback;

impl Backend for Fallback {
    fn identity(&self) -> &'static BuildIdentity {
        &FALLBACK_IDENTITY
    }

    fn log_tag(&self) -> &'static str {
        FALLBACK_LOG_TAG
    }
}

/// The real image-processing backend.
#[cfg(feature = "native")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

#[cfg(feature = "native")]
impl Backend for Native {
    fn identity(&self) -> &'static BuildIdentity {
        &NATIVE_IDENTITY
    }

    fn log_tag(&self) -> &'static str {
        NATIVE_LOG_TAG
    }
}

#[cfg(feature = "native")]
pub type Linked = Native;

#[cfg(not(feature = "native"))]
pub type Linked = Fallback;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SENTINEL_VERSION;

    #[test]
    fn fallback_reports_sentinel() {
        let identity = Fallback.identity();
        assert!(identity.is_fallback());
        assert_eq!(identity.version(), SENTINEL_VERSION);
        assert_eq!(Fallback.log_tag(), "kmagick-dummy");
    }

    #[test]
    fn identity_is_shared() {
        assert!(std::ptr::eq(Fallback.identity(), Fallback::default().identity()));
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn linked_is_fallback_by_default() {
        assert!(Linked::default().identity().is_fallback());
    }

    #[cfg(feature = "native")]
    #[test]
    fn native_reports_crate_version() {
        let identity = Native.identity();
        assert!(!identity.is_fallback());
        assert_eq!(identity.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(Native.log_tag(), "kmagick");
    }
}
