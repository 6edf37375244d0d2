//! # Noise Error Types

use tessera_prng::PrngError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a noise pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A Catmull-Rom spline needs at least four knots.
    #[error("spline needs at least 4 knots, got {count}")]
    TooFewKnots {
        /// Number of knots supplied.
        count: usize,
    },

    /// Fractal parameters that would divide by zero or produce non-finite output.
    #[error("invalid fractal parameters: persistence {persistence}, frequency {frequency}")]
    InvalidFractal {
        /// Amplitude divisor per octave.
        persistence: f64,
        /// Frequency multiplier per octave.
        frequency: f64,
    },

    /// Grid sampling scale that is zero, negative, or not finite.
    #[error("invalid grid scale: {0}")]
    InvalidScale(f64),

    /// Grid dimensions whose pixel count overflows or cannot be allocated.
    #[error("grid of {width} x {height} pixels is too large")]
    GridTooLarge {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Configuration text could not be parsed or serialized.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Table construction failed in the PRNG layer.
    #[error(transparent)]
    Prng(#[from] PrngError),
}

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
