//! # Fisher-Yates Shuffles
//!
//! Two variants:
//!
//! - **Classic**: permutes a slice in place, walking from the last index
//!   down to 1 and swapping each element with a uniformly chosen earlier one.
//! - **Inside-out**: builds the permutation while consuming a source, so the
//!   source never needs to be materialised in its original order.
//!
//! Both draw `j` uniformly from `[0, i]` through [`RandomUniform`], so the
//! result is a uniformly random permutation.

use std::mem;

use crate::error::{PrngError, PrngResult};
use crate::generator::Generator;
use crate::uniform::RandomUniform;

/// Fisher-Yates shuffler owning (or borrowing, via `&mut G`) its generator.
///
/// # Example
///
/// ```
/// use tessera_prng::{FisherYates, XorShift0};
///
/// let mut deck: Vec<u32> = (1..=52).collect();
/// let mut shuffler = FisherYates::new(XorShift0::new(123_456_789));
/// shuffler.shuffle(&mut deck)?;
/// assert_eq!(deck.len(), 52);
/// # Ok::<(), tessera_prng::PrngError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FisherYates<G> {
    rng: G,
}

impl<G: Generator> FisherYates<G> {
    /// Wraps a generator.
    #[inline]
    #[must_use]
    pub const fn new(rng: G) -> Self {
        Self { rng }
    }

    /// Returns the generator, advanced by every shuffle performed so far.
    #[inline]
    pub fn into_inner(self) -> G {
        self.rng
    }

    /// Classic in-place shuffle.
    ///
    /// # Errors
    ///
    /// [`PrngError::EmptyTarget`] for an empty slice and
    /// [`PrngError::TargetTooLong`] for slices longer than `u32::MAX`. The
    /// generator is not advanced in either case.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> PrngResult<()> {
        check_target(items.len())?;
        for i in (1..items.len()).rev() {
            let j = self.pick(i);
            items.swap(i, j);
        }
        Ok(())
    }

    /// Inside-out shuffle of the first `dest.len()` source items into `dest`.
    ///
    /// For each destination index `i` a `j` is drawn from `[0, i]`; when
    /// `j != i` the value at `dest[j]` moves to `dest[i]` before `dest[j]`
    /// receives the next source item. Previous contents of `dest` are
    /// discarded.
    ///
    /// # Errors
    ///
    /// [`PrngError::EmptyTarget`], [`PrngError::TargetTooLong`], or
    /// [`PrngError::SourceExhausted`] when the source yields fewer than
    /// `dest.len()` items. The source is read before any draw, so on error
    /// neither `dest` nor the generator has changed.
    pub fn fill_from<T, I>(&mut self, source: I, dest: &mut [T]) -> PrngResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        check_target(dest.len())?;
        let items: Vec<T> = source.into_iter().take(dest.len()).collect();
        if items.len() < dest.len() {
            return Err(PrngError::SourceExhausted {
                needed: dest.len(),
                available: items.len(),
            });
        }

        for (i, item) in items.into_iter().enumerate() {
            let j = self.pick(i);
            if j != i {
                dest.swap(i, j);
            }
            dest[j] = item;
        }
        Ok(())
    }

    /// Inside-out shuffle of an entire source into a new `Vec`.
    ///
    /// Produces the same permutation as [`FisherYates::fill_from`] given the
    /// same source and generator state, without needing a pre-sized target.
    ///
    /// # Errors
    ///
    /// [`PrngError::EmptyTarget`] for an empty source,
    /// [`PrngError::TargetTooLong`] past `u32::MAX` items.
    pub fn collect_from<T, I>(&mut self, source: I) -> PrngResult<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.into_iter();
        let mut out = Vec::with_capacity(source.size_hint().0);
        for item in source {
            let i = out.len();
            check_target(i + 1)?;
            let j = self.pick(i);
            if j == i {
                out.push(item);
            } else {
                let displaced = mem::replace(&mut out[j], item);
                out.push(displaced);
            }
        }
        if out.is_empty() {
            return Err(PrngError::EmptyTarget);
        }
        Ok(out)
    }

    /// Uniform index in `[0, i]`. Callers guarantee `i < u32::MAX`.
    #[inline]
    fn pick(&mut self, i: usize) -> usize {
        RandomUniform::below(i as u32 + 1).sample(&mut self.rng) as usize
    }
}

fn check_target(len: usize) -> PrngResult<()> {
    if len == 0 {
        return Err(PrngError::EmptyTarget);
    }
    if u32::try_from(len).is_err() {
        return Err(PrngError::TargetTooLong { len });
    }
    Ok(())
}
