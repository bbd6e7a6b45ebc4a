//! Error types for the `nebula-world` crate.
//!
//! Generation is infallible once a [`GalaxyConfig`](crate::galaxy::GalaxyConfig)
//! has been validated; accrual returns [`WorldError`] on overflow.

use nebula_types::{PlanetId, ResourceType};

/// Errors that can occur while generating a galaxy or accruing resources.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested number of solar systems is negative or too large.
    #[error("invalid solar system count {requested}: expected 0..={max}")]
    InvalidSystemCount {
        /// The count that was asked for.
        requested: i64,
        /// Largest accepted count.
        max: u32,
    },

    /// An inventory counter or production total could not be represented.
    #[error("arithmetic overflow accruing {resource:?} on planet {planet}")]
    ArithmeticOverflow {
        /// The planet being advanced.
        planet: PlanetId,
        /// The resource whose total overflowed.
        resource: ResourceType,
    },

    /// Elapsed time between two instants could not be computed.
    #[error("elapsed time overflow between {from_ms} and {to_ms}")]
    ElapsedOverflow {
        /// Last update instant in milliseconds.
        from_ms: i64,
        /// Requested instant in milliseconds.
        to_ms: i64,
    },
}
