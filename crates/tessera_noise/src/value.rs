//! # Value Noise
//!
//! Random scalars pinned to integer lattice points, blended across each cell
//! with an interpolation [`Kernel`].
//!
//! ## Determinism Guarantee
//!
//! Tables are built from a [`RandomUInt`] seeded with the given seed: the
//! permutation is shuffled first, then the 256 values are drawn from the same
//! generator. The same seed and kernel give the same field everywhere.

use tessera_prng::{Generator, RandomUInt};
use tracing::debug;

use crate::error::NoiseResult;
use crate::kernel::Kernel;
use crate::lattice::{PermutationTable, ValueTable, LATTICE_SIZE};

/// 2D value noise over a 256-periodic lattice.
///
/// Output stays within the range of the value table, so always in `[0, 1]`
/// for the two-point kernels. The spline kernel can overshoot slightly.
///
/// # Example
///
/// ```
/// use tessera_noise::{Kernel, ValueNoise};
///
/// let noise = ValueNoise::new(42, Kernel::Cosine)?;
/// let height = noise.sample(12.5, 3.25);
/// assert!((0.0..=1.0).contains(&height));
/// # Ok::<(), tessera_noise::NoiseError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueNoise {
    perm: PermutationTable,
    values: ValueTable,
    kernel: Kernel,
}

impl ValueNoise {
    /// Builds the tables from a fresh [`RandomUInt`] seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Propagates table construction failures from the PRNG layer.
    pub fn new(seed: u32, kernel: Kernel) -> NoiseResult<Self> {
        debug!(seed, ?kernel, "building value noise tables");
        Self::with_generator(&mut RandomUInt::new(seed), kernel)
    }

    /// Builds the tables from any generator, advancing it.
    ///
    /// # Errors
    ///
    /// Propagates table construction failures from the PRNG layer.
    pub fn with_generator<G: Generator + ?Sized>(rng: &mut G, kernel: Kernel) -> NoiseResult<Self> {
        let perm = PermutationTable::new(rng)?;
        let values = ValueTable::new(rng);
        Ok(Self {
            perm,
            values,
            kernel,
        })
    }

    /// The configured kernel.
    #[inline]
    #[must_use]
    pub const fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Same tables, different kernel.
    #[must_use]
    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// The permutation table.
    #[inline]
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// Value at an integer lattice point.
    #[inline]
    #[must_use]
    pub fn lattice_value(&self, x: i32, y: i32) -> f64 {
        self.values.get(self.perm.hash(x, y))
    }

    /// Samples with the configured kernel.
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.sample_with(x, y, self.kernel)
    }

    /// Samples with an explicit kernel, ignoring the configured one.
    ///
    /// Integer coordinates return the lattice value exactly.
    #[must_use]
    pub fn sample_with(&self, x: f64, y: f64, kernel: Kernel) -> f64 {
        let (u0, uf) = split(x);
        let (v0, vf) = split(y);

        match kernel {
            Kernel::CubicSpline => {
                let mut rows = [0.0; 4];
                for (dy, row) in (-1..=2).zip(&mut rows) {
                    let v = v0.wrapping_add(dy);
                    let mut knots = [0.0; 4];
                    for (dx, knot) in (-1..=2).zip(&mut knots) {
                        *knot = self.lattice_value(u0.wrapping_add(dx), v);
                    }
                    *row = kernel.blend4(knots, uf);
                }
                kernel.blend4(rows, vf)
            }
            _ => {
                let u1 = u0.wrapping_add(1);
                let v1 = v0.wrapping_add(1);
                let top = kernel.blend(self.lattice_value(u0, v0), self.lattice_value(u1, v0), uf);
                let bottom =
                    kernel.blend(self.lattice_value(u0, v1), self.lattice_value(u1, v1), uf);
                kernel.blend(top, bottom, vf)
            }
        }
    }
}

/// Splits a coordinate into its lattice cell and the offset within it.
///
/// The cell is reduced modulo the lattice period before the cast, so
/// coordinates beyond the `i32` range still tile instead of saturating.
#[inline]
fn split(coord: f64) -> (i32, f64) {
    let floor = coord.floor();
    (floor.rem_euclid(LATTICE_SIZE as f64) as i32, coord - floor)
}
