//! # Tessera Noise
//!
//! Lattice value noise, interpolation kernels and fractal accumulation on
//! top of [`tessera_prng`].
//!
//! ## Pipeline
//!
//! 1. A seeded [`tessera_prng::RandomUInt`] shuffles a 256-entry
//!    [`PermutationTable`] and fills a 256-entry [`ValueTable`]
//! 2. [`ValueNoise`] hashes the lattice points around a sample and blends
//!    their values with a [`Kernel`]
//! 3. [`FractalNoise`] sums octaves of any [`Noise2D`] source
//!
//! ## Determinism Guarantee
//!
//! Same seed, kernel and octave parameters give bit-identical fields. Tables
//! are built once and never mutated, so a noise object can be shared across
//! threads for reading.
//!
//! ## Example
//!
//! ```rust
//! use tessera_noise::{FractalNoise, FractalParams, Kernel, Noise2D, ValueNoise};
//!
//! let base = ValueNoise::new(42, Kernel::CubicSpline)?;
//! let terrain = FractalNoise::new(&base, FractalParams::default())?;
//! let pixels = terrain.sample_grid(64, 64, 32.0)?;
//! assert_eq!(pixels.len(), 64 * 64);
//! # Ok::<(), tessera_noise::NoiseError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod field;
pub mod fractal;
pub mod kernel;
pub mod lattice;
pub mod value;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use field::Noise2D;
pub use fractal::{FractalNoise, FractalParams};
pub use kernel::{catmull_rom, catmull_rom_or_nearest, coserp, lerp, smoothstep, Kernel};
pub use lattice::{PermutationTable, ValueTable, LATTICE_SIZE};
pub use value::ValueNoise;
