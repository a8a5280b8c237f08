//! The identity a build reports to its callers.

use serde::Serialize;

/// Reserved version string meaning "no real backend was linked".
pub const SENTINEL_VERSION: &str = "dummy-0.0.0";

/// Version and backend kind of the loaded library.
///
/// Values are only built through [`BuildIdentity::fallback`] and
/// [`BuildIdentity::native`], so a fallback identity always carries
/// [`SENTINEL_VERSION`] and a native one never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildIdentity {
    version: &'static str,
    is_fallback: bool,
}

impl BuildIdentity {
    /// Identity of the stand-in used when the backend failed to build.
    pub const fn fallback() -> Self {
        Self {
            version: SENTINEL_VERSION,
            is_fallback: true,
        }
    }

    /// Identity of a build with the real backend linked.
    ///
    /// # Panics
    ///
    /// If `version` is the sentinel. In a `const`/`static` initializer this
    /// is a compile error.
    pub const fn native(version: &'static str) -> Self {
        assert!(
            !const_str_eq(version, SENTINEL_VERSION),
            "the sentinel version is reserved for the fallback backend"
        );
        Self {
            version,
            is_fallback: false,
        }
    }

    pub const fn version(&self) -> &'static str {
        self.version
    }

    pub const fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
