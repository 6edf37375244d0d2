//! # PRNG Error Types
//!
//! Parameter errors raised by samplers and shuffles. None of them is fatal
//! and none of them is raised after a generator has been advanced.

use thiserror::Error;

/// Errors that can occur when configuring a sampler or running a shuffle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrngError {
    /// Integer range with `lower > upper`.
    #[error("invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange {
        /// Inclusive lower bound.
        lower: u32,
        /// Exclusive upper bound.
        upper: u32,
    },

    /// Floating-point interval that is empty, reversed, or not finite.
    #[error("invalid interval: [{lower}, {upper}) must be finite with lower < upper")]
    InvalidInterval {
        /// Inclusive lower bound.
        lower: f64,
        /// Exclusive upper bound.
        upper: f64,
    },

    /// A shuffle was handed nothing to permute.
    #[error("shuffle target is empty")]
    EmptyTarget,

    /// A shuffle target longer than the 32-bit sampler can index.
    #[error("shuffle target too long: {len} elements")]
    TargetTooLong {
        /// Number of elements in the target.
        len: usize,
    },

    /// The inside-out shuffle ran out of source items before filling its target.
    #[error("source exhausted: needed {needed} items, got {available}")]
    SourceExhausted {
        /// Items required to fill the destination.
        needed: usize,
        /// Items the source actually produced.
        available: usize,
    },
}

/// Result type for PRNG operations.
pub type PrngResult<T> = Result<T, PrngError>;
