//! # Generator Trait
//!
//! The one seam every sampler, shuffle and noise table is written against:
//! "give me the next raw 32-bit word".

/// A deterministic source of raw 32-bit values.
///
/// Implementations advance their state only through [`Generator::next_raw`],
/// and the returned value is a pure function of the state before the call.
///
/// A generator is mutable state. Two call sites that expect independent
/// sequences must each own their own instance.
pub trait Generator {
    /// Advances the state and returns the next raw value.
    fn next_raw(&mut self) -> u32;
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        (**self).next_raw()
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline]
    fn next_raw(&mut self) -> u32 {
        (**self).next_raw()
    }
}
