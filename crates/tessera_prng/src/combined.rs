//! # Combined Generator
//!
//! Mixes three structurally unrelated generators so weaknesses in one are
//! masked by the others. This is the generator procedural-generation code
//! (maze carving, run selection) is expected to draw from.

use crate::cmwc::Cmwc;
use crate::generator::Generator;
use crate::lcg::Minstd;
use crate::xorshift::XorShift0;

/// `(cmwc ^ minstd) + xorshift`, all three advanced on every call.
///
/// # Example
///
/// ```
/// use tessera_prng::{Generator, RandomUInt, RandomUniform};
///
/// let mut rng = RandomUInt::new(8_423_032);
/// let coin = RandomUniform::new(0, 2)?;
/// let heads = coin.sample(&mut rng) == 1;
/// # let _ = heads;
/// # Ok::<(), tessera_prng::PrngError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomUInt {
    cmwc: Cmwc,
    minstd: Minstd,
    xorshift: XorShift0,
}

impl RandomUInt {
    /// Creates the combined generator; all three parts share the seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            cmwc: Cmwc::new(seed),
            minstd: Minstd::new(seed),
            xorshift: XorShift0::new(seed),
        }
    }
}

impl Generator for RandomUInt {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        let cmwc = self.cmwc.next_raw();
        let minstd = self.minstd.next_raw();
        let xorshift = self.xorshift.next_raw();
        (cmwc ^ minstd).wrapping_add(xorshift)
    }
}
