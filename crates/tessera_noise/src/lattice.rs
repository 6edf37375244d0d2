//! # Lattice Tables
//!
//! A 256-entry permutation table hashes integer lattice points, and a
//! 256-entry value table maps each hash to a scalar in `[0, 1]`.
//!
//! ## Hash
//!
//! `hash(x, y) = perm[(x + perm[y & 255]) & 255]`
//!
//! Masking uses the two's-complement bit pattern of the `i32` coordinate, so
//! `-1 & 255 == 255` and the lattice tiles with period 256 on both axes,
//! negative coordinates included.

use tessera_prng::{FisherYates, Generator, RandomDouble};

use crate::error::NoiseResult;

/// Entries in the permutation and value tables; also the lattice period.
pub const LATTICE_SIZE: usize = 256;

const MASK: i32 = (LATTICE_SIZE - 1) as i32;

/// Shuffled identity permutation of `0..=255`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; LATTICE_SIZE],
}

impl PermutationTable {
    /// Builds the table by shuffling the identity with `rng`.
    ///
    /// Consumes 255 range draws (more when a draw is rejected).
    ///
    /// # Errors
    ///
    /// Propagates shuffle failures from the PRNG layer. A 256-entry table
    /// never triggers one in practice.
    pub fn new<G: Generator + ?Sized>(rng: &mut G) -> NoiseResult<Self> {
        let mut perm = [0u8; LATTICE_SIZE];
        for (slot, value) in perm.iter_mut().zip(0u8..=255) {
            *slot = value;
        }
        FisherYates::new(rng).shuffle(&mut perm)?;
        Ok(Self { perm })
    }

    /// Hashes a lattice point to a table index.
    #[inline]
    #[must_use]
    pub fn hash(&self, x: i32, y: i32) -> u8 {
        let row = i32::from(self.perm[(y & MASK) as usize]);
        self.perm[(x.wrapping_add(row) & MASK) as usize]
    }

    /// Entry at `index`, wrapped into range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index & (LATTICE_SIZE - 1)]
    }

    /// The raw table.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

/// Random scalars in `[0, 1]`, one per permutation index.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueTable {
    values: [f64; LATTICE_SIZE],
}

impl ValueTable {
    /// Fills the table with 256 unit-interval draws from `rng`.
    #[must_use]
    pub fn new<G: Generator + ?Sized>(rng: &mut G) -> Self {
        let sampler = RandomDouble::unit();
        let mut values = [0.0; LATTICE_SIZE];
        for value in &mut values {
            *value = sampler.sample(rng);
        }
        Self { values }
    }

    /// Value for a hash.
    #[inline]
    #[must_use]
    pub fn get(&self, hash: u8) -> f64 {
        self.values[usize::from(hash)]
    }

    /// The raw table.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
