//! # `rand` Interoperability
//!
//! Every generator implements [`RngCore`] and [`SeedableRng`], so it can
//! drive anything in the `rand` ecosystem. The raw stream is unchanged:
//! `next_u32` is exactly [`Generator::next_raw`]. Seeds are 4 little-endian
//! bytes.

use rand::{Error, RngCore, SeedableRng};

use crate::cmwc::Cmwc;
use crate::combined::RandomUInt;
use crate::generator::Generator;
use crate::lcg::Lcg;
use crate::xorshift::XorShift;

/// Low word first, matching `rand_core`'s `next_u64_via_u32`.
#[inline]
fn next_u64_via_raw<G: Generator>(rng: &mut G) -> u64 {
    let low = u64::from(rng.next_raw());
    let high = u64::from(rng.next_raw());
    (high << 32) | low
}

/// Little-endian words; a trailing partial word consumes a full draw.
fn fill_bytes_via_raw<G: Generator>(rng: &mut G, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(4) {
        let bytes = rng.next_raw().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

macro_rules! impl_rand_traits {
    ($(impl[$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<$($generics)*> RngCore for $ty {
                #[inline]
                fn next_u32(&mut self) -> u32 {
                    Generator::next_raw(self)
                }

                #[inline]
                fn next_u64(&mut self) -> u64 {
                    next_u64_via_raw(self)
                }

                fn fill_bytes(&mut self, dest: &mut [u8]) {
                    fill_bytes_via_raw(self, dest);
                }

                fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
                    fill_bytes_via_raw(self, dest);
                    Ok(())
                }
            }

            impl<$($generics)*> SeedableRng for $ty {
                type Seed = [u8; 4];

                fn from_seed(seed: Self::Seed) -> Self {
                    <$ty>::new(u32::from_le_bytes(seed))
                }
            }
        )+
    };
}

impl_rand_traits! {
    impl[const A: u32, const B: u32, const C: u32] XorShift<A, B, C>;
    impl[const A: u32, const C: u32, const M: u32] Lcg<A, C, M>;
    impl[] Cmwc;
    impl[] RandomUInt;
}
