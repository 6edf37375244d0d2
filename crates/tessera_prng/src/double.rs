//! # Floating-Point Sampling
//!
//! A raw 32-bit draw is divided by the largest raw value, `2^32 - 1`. Zero
//! maps to 0.0 and `u32::MAX` maps to exactly 1.0, so the unit sampler covers
//! the closed interval `[0, 1]`; the top endpoint has probability `2^-32`.

use crate::error::{PrngError, PrngResult};
use crate::generator::Generator;

/// Largest raw output of every generator.
const RAW_MAX: f64 = 4_294_967_295.0;

/// Samples doubles in `[0, 1]`, optionally mapped onto `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomDouble {
    lower: f64,
    width: f64,
}

impl Default for RandomDouble {
    fn default() -> Self {
        Self::unit()
    }
}

impl RandomDouble {
    /// Sampler over `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            lower: 0.0,
            width: 1.0,
        }
    }

    /// Sampler over `[lower, upper]`.
    ///
    /// `upper` itself is only reached by a raw draw of `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidInterval`] unless both bounds are finite
    /// and `lower < upper`.
    pub fn between(lower: f64, upper: f64) -> PrngResult<Self> {
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(PrngError::InvalidInterval { lower, upper });
        }
        Ok(Self {
            lower,
            width: upper - lower,
        })
    }

    /// Maps a raw generator word into `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn unit_from_raw(raw: u32) -> f64 {
        f64::from(raw) / RAW_MAX
    }

    /// Draws one value.
    #[inline]
    pub fn sample<G: Generator + ?Sized>(&self, rng: &mut G) -> f64 {
        self.lower + Self::unit_from_raw(rng.next_raw()) * self.width
    }
}
