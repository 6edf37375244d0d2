//! # Unbiased Integer Ranges
//!
//! `raw % range` is biased whenever `2^32` is not a multiple of `range`: the
//! low residues get one extra pre-image. Rejecting every raw value below
//! `(2^32 - range) mod range` leaves a multiple of `range` candidates, so the
//! remainder is exactly uniform.

use crate::error::{PrngError, PrngResult};
use crate::generator::Generator;

/// Uniform sampler over the half-open range `[lower, upper)`.
///
/// # Example
///
/// ```
/// use tessera_prng::{RandomUniform, XorShift0};
///
/// let mut rng = XorShift0::new(123_456_789);
/// let die = RandomUniform::new(1, 7)?;
/// let roll = die.sample(&mut rng);
/// assert!((1..7).contains(&roll));
/// # Ok::<(), tessera_prng::PrngError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RandomUniform {
    lower: u32,
    range: u32,
    threshold: u32,
}

impl RandomUniform {
    /// Creates a sampler over `[lower, upper)`.
    ///
    /// `lower == upper` is a valid, degenerate range: every sample is `lower`
    /// and no generator draw is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`PrngError::InvalidRange`] if `lower > upper`.
    pub fn new(lower: u32, upper: u32) -> PrngResult<Self> {
        if lower > upper {
            return Err(PrngError::InvalidRange { lower, upper });
        }
        Ok(Self::with_range(lower, upper - lower))
    }

    /// Creates a sampler over `[0, upper)`. Infallible.
    #[inline]
    #[must_use]
    pub const fn below(upper: u32) -> Self {
        Self::with_range(0, upper)
    }

    const fn with_range(lower: u32, range: u32) -> Self {
        // (2^32 - range) mod range, computed in 32-bit arithmetic.
        let threshold = if range == 0 {
            0
        } else {
            range.wrapping_neg() % range
        };
        Self {
            lower,
            range,
            threshold,
        }
    }

    /// Inclusive lower bound.
    #[inline]
    #[must_use]
    pub const fn lower(&self) -> u32 {
        self.lower
    }

    /// Number of distinct values the sampler produces (0 when degenerate).
    #[inline]
    #[must_use]
    pub const fn range(&self) -> u32 {
        self.range
    }

    /// Raw values strictly below this are rejected.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Draws one value.
    ///
    /// Each draw is rejected with probability `threshold / 2^32 < 1/2`.
    #[inline]
    pub fn sample<G: Generator + ?Sized>(&self, rng: &mut G) -> u32 {
        if self.range == 0 {
            return self.lower;
        }
        loop {
            let raw = rng.next_raw();
            if raw >= self.threshold {
                return self.lower + raw % self.range;
            }
        }
    }
}
