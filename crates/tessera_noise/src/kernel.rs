//! # Interpolation Kernels
//!
//! Blend functions between lattice values. None of them clamp `f`: value
//! noise always hands in the fractional part of a coordinate, which is
//! already in `[0, 1)`.
//!
//! | Kernel        | Points | Continuity at lattice lines |
//! |---------------|--------|-----------------------------|
//! | `Linear`      | 2      | C0                          |
//! | `Cosine`      | 2      | C1 (zero slope at knots)    |
//! | `Smoothstep`  | 2      | C1 (zero slope at knots)    |
//! | `CubicSpline` | 4      | C1 (Catmull-Rom)            |

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NoiseError, NoiseResult};

/// Catmull-Rom basis, rows are the cubic, quadratic, linear and constant
/// coefficients applied to four consecutive knots.
const CATMULL_ROM: [[f64; 4]; 4] = [
    [-0.5, 1.5, -1.5, 0.5],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 0.0, 0.5, 0.0],
    [0.0, 1.0, 0.0, 0.0],
];

/// Linear interpolation, `a + f * (b - a)`.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, f: f64) -> f64 {
    a + f * (b - a)
}

/// Cosine-eased interpolation, `lerp(a, b, (1 - cos(f * pi)) / 2)`.
#[inline]
#[must_use]
pub fn coserp(a: f64, b: f64, f: f64) -> f64 {
    lerp(a, b, (1.0 - (f * PI).cos()) * 0.5)
}

/// Hermite smoothstep of `x` between edges `a` and `b`.
///
/// Returns 0 below `a`, 1 at or above `b`, and `3t^2 - 2t^3` in between with
/// `t = (x - a) / (b - a)`.
#[inline]
#[must_use]
pub fn smoothstep(a: f64, b: f64, x: f64) -> f64 {
    if x < a {
        0.0
    } else if x >= b {
        1.0
    } else {
        let t = (x - a) / (b - a);
        t * t * (3.0 - 2.0 * t)
    }
}

/// Evaluates the cubic through `knots[1]..knots[2]` at `t` using Horner's rule.
#[inline]
fn cubic_span(t: f64, knots: [f64; 4]) -> f64 {
    let [c3, c2, c1, c0] = CATMULL_ROM.map(|row| {
        row[0] * knots[0] + row[1] * knots[1] + row[2] * knots[2] + row[3] * knots[3]
    });
    ((c3 * t + c2) * t + c1) * t + c0
}

/// Catmull-Rom spline through `knots`, evaluated at `x` in `[0, 1]`.
///
/// `x` is clamped to `[0, 1]` and scaled by `knots.len() - 3` to pick one of
/// the four-knot spans; `x == 1` uses the last span at its end. The first and
/// last knots only steer the tangents: `x == 0` gives `knots[1]` and
/// `x == 1` gives `knots[len - 2]`.
///
/// # Errors
///
/// [`NoiseError::TooFewKnots`] for fewer than four knots.
///
/// # Example
///
/// ```
/// use tessera_noise::kernel::catmull_rom;
///
/// let knots = [0.5, 1.0, 3.0, 2.0];
/// assert_eq!(catmull_rom(0.0, &knots)?, 1.0);
/// assert_eq!(catmull_rom(1.0, &knots)?, 3.0);
/// # Ok::<(), tessera_noise::NoiseError>(())
/// ```
pub fn catmull_rom(x: f64, knots: &[f64]) -> NoiseResult<f64> {
    if knots.len() < 4 {
        return Err(NoiseError::TooFewKnots { count: knots.len() });
    }
    let spans = knots.len() - 3;
    let scaled = x.clamp(0.0, 1.0) * spans as f64;
    let span = (scaled as usize).min(spans - 1);
    let t = scaled - span as f64;
    let window = [knots[span], knots[span + 1], knots[span + 2], knots[span + 3]];
    Ok(cubic_span(t, window))
}

/// [`catmull_rom`] that never fails.
///
/// With too few knots it logs a warning and returns the knot nearest to `x`
/// (0.0 when there are none), so a bad call cannot abort a noise pipeline.
#[must_use]
pub fn catmull_rom_or_nearest(x: f64, knots: &[f64]) -> f64 {
    match catmull_rom(x, knots) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, x, "spline fallback to nearest knot");
            let Some(last) = knots.len().checked_sub(1) else {
                return 0.0;
            };
            let nearest = (x.clamp(0.0, 1.0) * last as f64).round() as usize;
            knots[nearest.min(last)]
        }
    }
}

/// Interpolation strategy used by value noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    /// Straight-line blend. Cheapest, visible creases along lattice lines.
    Linear,
    /// Cosine-eased blend.
    #[default]
    Cosine,
    /// Smoothstep-eased blend.
    Smoothstep,
    /// Catmull-Rom over a 4x4 lattice neighbourhood.
    CubicSpline,
}

impl Kernel {
    /// Every kernel, in declaration order.
    pub const ALL: [Self; 4] = [Self::Linear, Self::Cosine, Self::Smoothstep, Self::CubicSpline];

    /// Lattice points needed per axis: 2, or 4 for the spline.
    #[inline]
    #[must_use]
    pub const fn footprint(self) -> usize {
        match self {
            Self::Linear | Self::Cosine | Self::Smoothstep => 2,
            Self::CubicSpline => 4,
        }
    }

    /// Blends two values.
    ///
    /// For `CubicSpline` the end knots are duplicated (`[a, a, b, b]`), which
    /// keeps the curve through `a` and `b` with flattened end tangents.
    #[inline]
    #[must_use]
    pub fn blend(self, a: f64, b: f64, f: f64) -> f64 {
        match self {
            Self::Linear => lerp(a, b, f),
            Self::Cosine => coserp(a, b, f),
            Self::Smoothstep => lerp(a, b, smoothstep(0.0, 1.0, f)),
            Self::CubicSpline => cubic_span(f, [a, a, b, b]),
        }
    }

    /// Blends four consecutive values at `f` between the middle two.
    ///
    /// Two-point kernels ignore the outer values.
    #[inline]
    #[must_use]
    pub fn blend4(self, knots: [f64; 4], f: f64) -> f64 {
        match self {
            Self::CubicSpline => cubic_span(f, knots),
            _ => self.blend(knots[1], knots[2], f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        // No clamping.
        assert_eq!(lerp(2.0, 6.0, 1.5), 8.0);
    }

    #[test]
    fn test_coserp_is_eased() {
        assert!((coserp(0.0, 1.0, 0.0)).abs() < EPSILON);
        assert!((coserp(0.0, 1.0, 0.5) - 0.5).abs() < EPSILON);
        assert!((coserp(0.0, 1.0, 1.0) - 1.0).abs() < EPSILON);
        assert!(coserp(0.0, 1.0, 0.1) < lerp(0.0, 1.0, 0.1), "Cosine starts slower");
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(1.0, 3.0, 0.5), 0.0);
        assert_eq!(smoothstep(1.0, 3.0, 3.0), 1.0);
        assert_eq!(smoothstep(1.0, 3.0, 9.0), 1.0);
        assert_eq!(smoothstep(1.0, 3.0, 2.0), 0.5);
        assert_eq!(smoothstep(0.0, 1.0, 0.25), 0.156_25);
    }

    #[test]
    fn test_smoothstep_equal_edges_does_not_divide() {
        assert_eq!(smoothstep(1.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_spline_endpoints() {
        let knots = [0.5, 1.0, 3.0, 2.0];
        assert_eq!(catmull_rom(0.0, &knots).unwrap(), knots[1]);
        assert_eq!(catmull_rom(1.0, &knots).unwrap(), knots[2]);
        // Clamped outside [0, 1].
        assert_eq!(catmull_rom(-4.0, &knots).unwrap(), knots[1]);
        assert_eq!(catmull_rom(7.0, &knots).unwrap(), knots[2]);
    }

    #[test]
    fn test_spline_passes_through_interior_knots() {
        let knots = [0.5, 1.0, 3.0, 2.0, 2.5, 1.0];
        // Three spans; interior knots sit at x = 0, 1/3, 2/3, 1.
        for (k, expected) in knots[1..5].iter().enumerate() {
            let x = k as f64 / 3.0;
            let value = catmull_rom(x, &knots).unwrap();
            assert!((value - expected).abs() < EPSILON, "x = {x}: {value} != {expected}");
        }
    }

    #[test]
    fn test_spline_reproduces_lines() {
        let knots = [0.0, 1.0, 2.0, 3.0];
        for step in 0..=10 {
            let x = f64::from(step) / 10.0;
            assert!((catmull_rom(x, &knots).unwrap() - (1.0 + x)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_spline_too_few_knots() {
        assert_eq!(
            catmull_rom(0.5, &[1.0, 2.0, 3.0]),
            Err(NoiseError::TooFewKnots { count: 3 })
        );
    }

    #[test]
    fn test_spline_fallback() {
        assert_eq!(catmull_rom_or_nearest(0.5, &[]), 0.0);
        assert_eq!(catmull_rom_or_nearest(0.0, &[4.0, 8.0]), 4.0);
        assert_eq!(catmull_rom_or_nearest(0.9, &[4.0, 8.0]), 8.0);
        assert_eq!(catmull_rom_or_nearest(0.0, &[0.5, 1.0, 3.0, 2.0]), 1.0);
    }

    #[test]
    fn test_kernel_blend_endpoints() {
        for kernel in Kernel::ALL {
            assert!((kernel.blend(0.25, 0.75, 0.0) - 0.25).abs() < EPSILON, "{kernel:?}");
            assert!((kernel.blend(0.25, 0.75, 1.0) - 0.75).abs() < EPSILON, "{kernel:?}");
        }
    }

    #[test]
    fn test_blend4_two_point_kernels_ignore_outer_knots() {
        let knots = [100.0, 0.2, 0.6, -100.0];
        assert_eq!(Kernel::Linear.blend4(knots, 0.5), lerp(0.2, 0.6, 0.5));
        assert_eq!(Kernel::Cosine.blend4(knots, 0.3), coserp(0.2, 0.6, 0.3));
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(Kernel::default(), Kernel::Cosine);
        assert_eq!(Kernel::CubicSpline.footprint(), 4);
        assert_eq!(Kernel::Smoothstep.footprint(), 2);
    }
}
