//! # Noise Configuration
//!
//! Noise setups are loaded once at startup from TOML text:
//!
//! ```toml
//! seed = 42
//! kernel = "cubic_spline"
//!
//! [fractal]
//! persistence = 4.0
//! frequency = 2.0
//! octaves = 5
//! ```
//!
//! `kernel` defaults to `"cosine"` and `[fractal]` may be omitted. Reading
//! the file is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NoiseError, NoiseResult};
use crate::fractal::FractalParams;
use crate::kernel::Kernel;
use crate::value::ValueNoise;

/// Everything needed to rebuild a noise field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed for the table generator.
    pub seed: u32,
    /// Interpolation kernel.
    #[serde(default)]
    pub kernel: Kernel,
    /// Optional octave layering on top of the base field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractal: Option<FractalParams>,
}

impl NoiseConfig {
    /// Plain value noise with the default kernel.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            kernel: Kernel::default(),
            fractal: None,
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Config`] for malformed TOML or unknown keys, and
    /// [`NoiseError::InvalidFractal`] for a bad `[fractal]` table.
    pub fn from_toml_str(text: &str) -> NoiseResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| NoiseError::Config(e.to_string()))?;
        if let Some(fractal) = &config.fractal {
            fractal.validate()?;
        }
        debug!(seed = config.seed, kernel = ?config.kernel, "loaded noise config");
        Ok(config)
    }

    /// Serializes back to TOML.
    ///
    /// # Errors
    ///
    /// [`NoiseError::Config`] if a value has no TOML representation
    /// (a non-finite float, for instance).
    pub fn to_toml_string(&self) -> NoiseResult<String> {
        toml::to_string(self).map_err(|e| NoiseError::Config(e.to_string()))
    }

    /// Builds the base value noise field.
    ///
    /// Wrap it with [`crate::FractalNoise::new`] and [`NoiseConfig::fractal`]
    /// for octave layering.
    ///
    /// # Errors
    ///
    /// Propagates table construction failures.
    pub fn build(&self) -> NoiseResult<ValueNoise> {
        ValueNoise::new(self.seed, self.kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = NoiseConfig::from_toml_str("seed = 7").unwrap();
        assert_eq!(config, NoiseConfig::new(7));
        assert_eq!(config.kernel, Kernel::Cosine);
        assert!(config.fractal.is_none());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
            seed = 42
            kernel = "cubic_spline"

            [fractal]
            persistence = 4.0
            frequency = 2.0
            octaves = 5
        "#;
        let config = NoiseConfig::from_toml_str(text).unwrap();
        assert_eq!(config.kernel, Kernel::CubicSpline);
        assert_eq!(config.fractal, Some(FractalParams::default()));
    }

    #[test]
    fn test_unknown_kernel_rejected() {
        let result = NoiseConfig::from_toml_str("seed = 1\nkernel = \"bicubic\"");
        assert!(matches!(result, Err(NoiseError::Config(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = NoiseConfig::from_toml_str("seed = 1\nsharpness = 3");
        assert!(matches!(result, Err(NoiseError::Config(_))));
    }

    #[test]
    fn test_invalid_fractal_rejected() {
        let text = "seed = 1\n[fractal]\npersistence = 0.0\nfrequency = 2.0\noctaves = 3";
        assert!(matches!(
            NoiseConfig::from_toml_str(text),
            Err(NoiseError::InvalidFractal { .. })
        ));
    }

    #[test]
    fn test_round_trip() {
        let config = NoiseConfig {
            seed: 99,
            kernel: Kernel::Smoothstep,
            fractal: Some(FractalParams::new(2.0, 3.0, 4).unwrap()),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(NoiseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let config = NoiseConfig::from_toml_str("seed = 42\nkernel = \"linear\"").unwrap();
        let built = config.build().unwrap();
        assert_eq!(built, ValueNoise::new(42, Kernel::Linear).unwrap());
    }
}
