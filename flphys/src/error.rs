//! Engine result codes.
//!
//! Every failure the engine can report has a stable negative integer code so
//! that it can be logged or stored numerically and resolved back into text
//! with [`strerror`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Code reported for a successful call.
pub const RES_OK: i32 = 0;

/// A failed [`crate::Phys::run`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhysError {
    /// The engine was handed a missing instance.
    #[error("Null pointer error")]
    NullPtr,
    /// Two bodies occupy the same point while inter-object gravity is on.
    #[error("Zero distance error")]
    ZeroDist,
    /// A body with zero mass cannot be accelerated.
    #[error("Zero mass error")]
    ZeroMass,
}

impl PhysError {
    /// Stable numeric code for this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NullPtr => -1,
            Self::ZeroDist => -2,
            Self::ZeroMass => -3,
        }
    }

    /// Resolve a numeric code. Returns `None` for success and unknown codes.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::NullPtr),
            -2 => Some(Self::ZeroDist),
            -3 => Some(Self::ZeroMass),
            _ => None,
        }
    }
}

/// Human-readable description of any result code, including success.
#[must_use]
pub fn strerror(code: i32) -> &'static str {
    match code {
        RES_OK => "Success",
        -1 => "Null pointer error",
        -2 => "Zero distance error",
        -3 => "Zero mass error",
        _ => "Unknown error code",
    }
}
