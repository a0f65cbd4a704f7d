//! Error types for Galaxy3D culling
//!
//! The core geometry never fails: degenerate input propagates as degenerate
//! numbers. These errors are only produced by the hardened `try_*` entry
//! points, which validate their input before touching any state.

use std::fmt;

/// Result type for Galaxy3D culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Three plane points are collinear or coincident (no usable normal)
    DegeneratePlane(String),

    /// View frustum parameters describe no visible volume
    InvalidViewFrustum(String),

    /// Bounding box requested from an empty point set
    EmptyBoundingBox,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegeneratePlane(msg) => write!(f, "Degenerate plane: {}", msg),
            Error::InvalidViewFrustum(msg) => write!(f, "Invalid view frustum: {}", msg),
            Error::EmptyBoundingBox => write!(f, "Bounding box built from an empty point set"),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build the matching `Error` variant
///
/// # Example
///
/// ```ignore
/// return Err(culling_err!("galaxy3d::Plane", DegeneratePlane, "points {:?} are collinear", p));
/// ```
#[macro_export]
macro_rules! culling_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::culling_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an ERROR message and return early with the matching `Error` variant
#[macro_export]
macro_rules! culling_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::culling_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
