//! Error types.

use crate::color::Color;
use crate::mode::ModeId;

/// Why a ring request was rejected.
///
/// Every variant is answered with the same HTTP 400 body; the variants exist
/// so callers and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// The request did not carry exactly one query argument.
    ArgumentCount(usize),

    /// The single argument was not named `foreground`.
    ArgumentName,

    /// The argument value did not match `r<int>g<int>b<int>`.
    Malformed {
        /// Number of integers converted before scanning stopped.
        matched: usize,
    },

    /// All three channels were decoded but at least one is outside [0, 255].
    OutOfRange(Color),
}

impl core::fmt::Display for RequestError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RequestError::ArgumentCount(count) => {
                write!(f, "expected exactly one argument, got {}", count)
            }
            RequestError::ArgumentName => {
                write!(f, "argument must be named foreground")
            }
            RequestError::Malformed { matched } => {
                write!(
                    f,
                    "malformed color: decoded {} of 3 channels",
                    matched
                )
            }
            RequestError::OutOfRange(color) => {
                write!(
                    f,
                    "color r:{},g:{},b:{} is out of range 0-255",
                    color.r, color.g, color.b
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RequestError {}

/// Errors raised by a mode registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// A mode with this id is already registered.
    DuplicateMode(ModeId),

    /// The registry cannot hold any more modes.
    RegistryFull { capacity: usize },
}

impl core::fmt::Display for ModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ModeError::DuplicateMode(id) => {
                write!(f, "mode {} is already registered", id.0)
            }
            ModeError::RegistryFull { capacity } => {
                write!(f, "mode registry is full (capacity {})", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModeError {}
