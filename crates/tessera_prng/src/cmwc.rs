//! # Complementary Multiply-With-Carry
//!
//! Marsaglia's CMWC4096: a 4096-word history buffer, a carry word and a ring
//! index. Period is roughly `2^131086`.
//!
//! ## Bit-exactness
//!
//! The constants and the carry-correction branch in [`Cmwc::next_raw`] are
//! part of the output contract. Changing any of them changes every sequence.

use crate::generator::Generator;
use crate::lcg::Minstd;

/// Multiplier.
const A: u64 = 18_782;
/// Complement base, `b - 1` for `b = 2^32 - 1`.
const R: u32 = 0xFFFF_FFFE;
/// History buffer length. Must be a power of two.
const QUEUE_SIZE: usize = 4096;
/// The carry is always kept below this bound.
const C_MAX: u32 = 809_430_660;
/// Carry used if seeding never draws a value below [`C_MAX`].
const INITIAL_CARRY: u32 = 362_436;
/// Upper bound on carry draws during seeding.
const MAX_CARRY_DRAWS: usize = 64;

/// Complementary multiply-with-carry generator.
///
/// # Example
///
/// ```
/// use tessera_prng::{Cmwc, Generator};
///
/// let mut a = Cmwc::new(8_423_032);
/// let mut b = Cmwc::new(8_423_032);
/// assert_eq!(a.next_raw(), b.next_raw());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cmwc {
    /// History buffer, heap-allocated (16 KiB).
    queue: Box<[u32]>,
    /// Carry word, always below `C_MAX` after seeding.
    carry: u32,
    /// Index of the most recently replaced word.
    index: usize,
}

impl Cmwc {
    /// Creates a generator from a seed.
    ///
    /// The buffer is filled with 4096 draws from a [`Minstd`] seeded
    /// identically; the carry is the next MINSTD draw below `809430660`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut minstd = Minstd::new(seed);
        let queue: Box<[u32]> = (0..QUEUE_SIZE).map(|_| minstd.next_raw()).collect();

        // MINSTD stays below 2^31 - 1, so a draw is accepted with p ~ 0.38.
        let carry = (0..MAX_CARRY_DRAWS)
            .map(|_| minstd.next_raw())
            .find(|&draw| draw < C_MAX)
            .unwrap_or(INITIAL_CARRY);

        Self {
            queue,
            carry,
            index: QUEUE_SIZE - 1,
        }
    }

    /// Returns the current carry word.
    #[inline]
    #[must_use]
    pub const fn carry(&self) -> u32 {
        self.carry
    }

    /// Length of the history buffer.
    #[inline]
    #[must_use]
    pub const fn queue_len() -> usize {
        QUEUE_SIZE
    }
}

impl Generator for Cmwc {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        self.index = (self.index + 1) & (QUEUE_SIZE - 1);
        let t = A * u64::from(self.queue[self.index]) + u64::from(self.carry);
        self.carry = (t >> 32) as u32;

        let mut x = (t as u32).wrapping_add(self.carry);
        if x < self.carry {
            x = x.wrapping_add(1);
            self.carry += 1;
        }

        self.queue[self.index] = R.wrapping_sub(x);
        self.queue[self.index]
    }
}
