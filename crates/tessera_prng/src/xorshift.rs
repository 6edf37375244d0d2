//! # XorShift Generators
//!
//! Marsaglia's 32-bit xorshift family. One word of state, three shifts:
//!
//! ```text
//! x ^= x << a;
//! x ^= x >> b;
//! x ^= x << c;
//! ```
//!
//! Only certain `(a, b, c)` triples give the full period of `2^32 - 1`; the
//! complete list is [`FULL_PERIOD_TRIPLES`]. Zero is a fixed point of every
//! triple, so a zero seed is never used as-is.

use tracing::warn;

use crate::generator::Generator;

/// The 81 shift triples `(a, b, c)` that give a full-period 32-bit xorshift.
pub const FULL_PERIOD_TRIPLES: [(u32, u32, u32); 81] = [
    (1, 3, 10), (1, 5, 16), (1, 5, 19), (1, 9, 29), (1, 11, 6), (1, 11, 16), (1, 19, 3), (1, 21, 20), (1, 27, 27),
    (2, 5, 15), (2, 5, 21), (2, 7, 7), (2, 7, 9), (2, 7, 25), (2, 9, 15), (2, 15, 17), (2, 15, 25), (2, 21, 9),
    (3, 1, 14), (3, 3, 26), (3, 3, 28), (3, 3, 29), (3, 5, 20), (3, 5, 22), (3, 5, 25), (3, 7, 29), (3, 13, 7),
    (3, 23, 25), (3, 25, 24), (3, 27, 11), (4, 3, 17), (4, 3, 27), (4, 5, 15), (5, 3, 21), (5, 7, 22), (5, 9, 7),
    (5, 9, 28), (5, 9, 31), (5, 13, 6), (5, 15, 17), (5, 17, 13), (5, 21, 12), (5, 27, 8), (5, 27, 21), (5, 27, 25),
    (5, 27, 28), (6, 1, 11), (6, 3, 17), (6, 17, 9), (6, 21, 7), (6, 21, 13), (7, 1, 9), (7, 1, 18), (7, 1, 25),
    (7, 13, 25), (7, 17, 21), (7, 25, 12), (7, 25, 20), (8, 7, 23), (8, 9, 23), (9, 5, 1), (9, 5, 25), (9, 11, 19),
    (9, 21, 16), (10, 9, 21), (10, 9, 25), (11, 7, 12), (11, 7, 16), (11, 17, 13), (11, 21, 13), (12, 9, 23), (13, 3, 17),
    (13, 3, 27), (13, 5, 19), (13, 17, 15), (14, 1, 15), (14, 13, 15), (15, 1, 29), (17, 15, 20), (17, 15, 23), (17, 15, 26),
];

/// 32-bit xorshift generator with compile-time shift amounts.
///
/// # Example
///
/// ```
/// use tessera_prng::{Generator, XorShift};
///
/// let mut rng = XorShift::<1, 3, 10>::new(1);
/// assert_eq!(rng.next_raw(), 3075);
/// assert_eq!(rng.next_raw(), 5_898_885);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XorShift<const A: u32, const B: u32, const C: u32> {
    state: u32,
}

/// Marsaglia's favourite parameters, `(13, 7, 17)`.
///
/// This triple is not in [`FULL_PERIOD_TRIPLES`], so
/// [`XorShift::has_full_period`] reports `false` for it.
pub type XorShift0 = XorShift<13, 7, 17>;

impl<const A: u32, const B: u32, const C: u32> XorShift<A, B, C> {
    /// Shift amounts outside 1..32 either overflow or collapse the state.
    const SHIFTS_IN_RANGE: () = assert!(
        A > 0 && A < 32 && B > 0 && B < 32 && C > 0 && C < 32,
        "xorshift shift amounts must lie in 1..32"
    );

    /// Seed substituted for zero.
    pub const ZERO_SEED_REPLACEMENT: u32 = 1;

    /// Creates a generator from a seed.
    ///
    /// Zero would lock the generator at zero forever, so it is replaced by
    /// [`Self::ZERO_SEED_REPLACEMENT`] and a warning is logged.
    #[must_use]
    #[allow(clippy::let_unit_value)]
    pub fn new(seed: u32) -> Self {
        let () = Self::SHIFTS_IN_RANGE;
        let state = if seed == 0 {
            warn!(a = A, b = B, c = C, "zero xorshift seed is a fixed point, using 1");
            Self::ZERO_SEED_REPLACEMENT
        } else {
            seed
        };
        Self { state }
    }

    /// Returns the current state word (the last value produced).
    #[inline]
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Returns the shift triple this generator was instantiated with.
    #[inline]
    #[must_use]
    pub const fn shifts() -> (u32, u32, u32) {
        (A, B, C)
    }

    /// Whether the shift triple is one of [`FULL_PERIOD_TRIPLES`].
    #[must_use]
    pub fn has_full_period() -> bool {
        FULL_PERIOD_TRIPLES.contains(&(A, B, C))
    }
}

impl<const A: u32, const B: u32, const C: u32> Generator for XorShift<A, B, C> {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << A;
        x ^= x >> B;
        x ^= x << C;
        self.state = x;
        x
    }
}
