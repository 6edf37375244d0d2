//! # 2D Noise Fields
//!
//! [`Noise2D`] is the seam between noise sources and their consumers: fractal
//! accumulation runs over any implementor, and a renderer only needs
//! [`Noise2D::sample_grid`].

use crate::error::{NoiseError, NoiseResult};
use crate::fractal::FractalNoise;
use crate::value::ValueNoise;

/// A continuous scalar field over the plane.
pub trait Noise2D {
    /// Field value at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Samples a `width` x `height` pixel grid, row-major.
    ///
    /// Pixel `(col, row)` reads the field at `(col / scale, row / scale)`, so
    /// `scale` is the number of pixels per lattice cell.
    ///
    /// # Errors
    ///
    /// [`NoiseError::InvalidScale`] if `scale` is not a finite positive number,
    /// and [`NoiseError::GridTooLarge`] if `width * height` overflows or the
    /// buffer cannot be allocated.
    fn sample_grid(&self, width: usize, height: usize, scale: f64) -> NoiseResult<Vec<f64>> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(NoiseError::InvalidScale(scale));
        }
        let too_large = || NoiseError::GridTooLarge { width, height };
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let mut grid = Vec::new();
        grid.try_reserve_exact(len).map_err(|_| too_large())?;
        for row in 0..height {
            let y = row as f64 / scale;
            for col in 0..width {
                grid.push(self.sample(col as f64 / scale, y));
            }
        }
        Ok(grid)
    }
}

impl Noise2D for ValueNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        Self::sample(self, x, y)
    }
}

impl<N: Noise2D + ?Sized> Noise2D for FractalNoise<'_, N> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        Self::sample(self, x, y)
    }
}

impl<F: Fn(f64, f64) -> f64> Noise2D for F {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
