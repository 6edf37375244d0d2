//! # Linear Congruential Generators
//!
//! `x = (a * x + c) mod m`, evaluated with a 64-bit intermediate so the
//! product never overflows before the reduction.

use tracing::warn;

use crate::generator::Generator;

/// Linear congruential generator with compile-time parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lcg<const A: u32, const C: u32, const M: u32> {
    state: u32,
}

/// Park and Miller's "minimal standard", `a = 48271`, `m = 2^31 - 1`.
pub type Minstd = Lcg<48_271, 0, 2_147_483_647>;

/// Marsaglia's LCG, `a = 69069`, `c = 362437`, `m = 2^31 - 1`.
pub type MarsagliaLcg = Lcg<69_069, 362_437, 2_147_483_647>;

impl<const A: u32, const C: u32, const M: u32> Lcg<A, C, M> {
    const MODULUS_NONZERO: () = assert!(M > 0, "LCG modulus must be non-zero");

    /// Creates a generator from a seed.
    ///
    /// A purely multiplicative generator (`c == 0`) seeded with a multiple of
    /// `m` would return zero forever; such seeds are replaced by 1.
    #[must_use]
    #[allow(clippy::let_unit_value)]
    pub fn new(seed: u32) -> Self {
        let () = Self::MODULUS_NONZERO;
        let state = if C == 0 && seed % M == 0 {
            warn!(seed, a = A, m = M, "multiplicative LCG seed is a fixed point, using 1");
            1
        } else {
            seed
        };
        Self { state }
    }

    /// Returns the current state word.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl<const A: u32, const C: u32, const M: u32> Generator for Lcg<A, C, M> {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        let next = (u64::from(A) * u64::from(self.state) + u64::from(C)) % u64::from(M);
        self.state = next as u32;
        self.state
    }
}
