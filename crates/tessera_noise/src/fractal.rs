//! # Fractal Noise
//!
//! Sums octaves of an underlying 2D noise source at rising frequency and
//! falling amplitude:
//!
//! `result = sum over i in 0..octaves of noise(x * beta^i, y * beta^i) / alpha^i`
//!
//! where `alpha` is the persistence and `beta` the frequency multiplier. The
//! sum is not normalised, so the output range grows with the octave count;
//! clamping for display is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, NoiseResult};
use crate::field::Noise2D;

/// Octave parameters. Plain values, validated before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FractalParams {
    /// Amplitude divisor per octave (`alpha`).
    pub persistence: f64,
    /// Frequency multiplier per octave (`beta`).
    pub frequency: f64,
    /// Number of octaves summed. Zero yields a constant 0.
    pub octaves: u32,
}

impl FractalParams {
    /// Creates and validates a parameter set.
    ///
    /// # Errors
    ///
    /// See [`FractalParams::validate`].
    pub fn new(persistence: f64, frequency: f64, octaves: u32) -> NoiseResult<Self> {
        let params = Self {
            persistence,
            frequency,
            octaves,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that the sum stays finite.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidFractal`] if `persistence` is zero or either
    /// value is not finite.
    pub fn validate(&self) -> NoiseResult<()> {
        if self.persistence != 0.0 && self.persistence.is_finite() && self.frequency.is_finite() {
            Ok(())
        } else {
            Err(NoiseError::InvalidFractal {
                persistence: self.persistence,
                frequency: self.frequency,
            })
        }
    }
}

impl Default for FractalParams {
    /// Five octaves, each at double the frequency and a quarter of the
    /// amplitude of the previous one.
    fn default() -> Self {
        Self {
            persistence: 4.0,
            frequency: 2.0,
            octaves: 5,
        }
    }
}

/// Fractal accumulation over a borrowed noise source.
///
/// # Example
///
/// ```
/// use tessera_noise::{FractalNoise, FractalParams, Kernel, ValueNoise};
///
/// let base = ValueNoise::new(42, Kernel::Cosine)?;
/// let terrain = FractalNoise::new(&base, FractalParams::default())?;
/// let height = terrain.sample(0.3, 0.7);
/// assert!(height.is_finite());
/// # Ok::<(), tessera_noise::NoiseError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FractalNoise<'a, N: ?Sized> {
    source: &'a N,
    params: FractalParams,
}

impl<'a, N: Noise2D + ?Sized> FractalNoise<'a, N> {
    /// Wraps `source` after validating `params`.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidFractal`] for parameters that fail
    /// [`FractalParams::validate`].
    pub fn new(source: &'a N, params: FractalParams) -> NoiseResult<Self> {
        params.validate()?;
        Ok(Self { source, params })
    }

    /// The octave parameters.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> FractalParams {
        self.params
    }

    /// The underlying source.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &'a N {
        self.source
    }

    /// Sums the octaves at `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut scale = 1.0;

        for _ in 0..self.params.octaves {
            total += self.source.sample(x * frequency, y * frequency) / scale;
            frequency *= self.params.frequency;
            scale *= self.params.persistence;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(x: f64, y: f64) -> f64 {
        x + 2.0 * y
    }

    #[test]
    fn test_single_octave_is_unscaled() {
        let source = plane;
        let fractal = FractalNoise::new(&source, FractalParams::new(3.0, 5.0, 1).unwrap()).unwrap();
        assert_eq!(fractal.sample(0.25, 1.5), plane(0.25, 1.5));
    }

    #[test]
    fn test_zero_octaves_is_zero() {
        let source = plane;
        let fractal = FractalNoise::new(&source, FractalParams::new(2.0, 2.0, 0).unwrap()).unwrap();
        assert_eq!(fractal.sample(7.0, 9.0), 0.0);
    }

    #[test]
    fn test_octaves_of_a_constant() {
        let source = |_: f64, _: f64| 1.0;
        let fractal = FractalNoise::new(&source, FractalParams::new(2.0, 3.0, 4).unwrap()).unwrap();
        // 1 + 1/2 + 1/4 + 1/8
        assert_eq!(fractal.sample(0.0, 0.0), 1.875);
    }

    #[test]
    fn test_rejects_bad_params() {
        assert_eq!(
            FractalParams::new(0.0, 2.0, 3),
            Err(NoiseError::InvalidFractal {
                persistence: 0.0,
                frequency: 2.0
            })
        );
        assert!(FractalParams::new(f64::INFINITY, 2.0, 3).is_err());
        assert!(FractalParams::new(2.0, f64::NAN, 3).is_err());

        let source = plane;
        let bad = FractalParams {
            persistence: 0.0,
            ..FractalParams::default()
        };
        assert!(FractalNoise::new(&source, bad).is_err());
    }

    #[test]
    fn test_default_params() {
        let params = FractalParams::default();
        assert_eq!(params.octaves, 5);
        assert!(params.validate().is_ok());
    }
}
