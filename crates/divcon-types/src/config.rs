// ─────────────────────────────────────────────────────────────────────
// DivCon Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Run configuration for the demo harness.
//!
//! Every field has a default, so a partial JSON file (or no file at all)
//! yields a usable configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DivconError, DivconResult};

/// Top-level harness configuration, one parameter block per component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for every generated input; reruns with the same seed reproduce
    /// the same data.
    pub seed: u64,
    pub karatsuba: KaratsubaParams,
    pub inversions: InversionsParams,
    pub fixed_point: FixedPointParams,
    pub unimodal: UnimodalParams,
    pub closest_pair: ClosestPairParams,
    pub strassen: StrassenParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KaratsubaParams {
    /// Left operand, as a decimal numeral of arbitrary length.
    pub x: String,
    /// Right operand.
    pub y: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InversionsParams {
    /// Input file with one integer per line. When absent, `n` uniform
    /// integers are generated instead.
    pub in_file: Option<PathBuf>,
    pub n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedPointParams {
    /// Array length (default: 10_000).
    #[serde(default = "default_fixed_point_n")]
    pub n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnimodalParams {
    /// Array length (default: 10_000_000).
    #[serde(default = "default_unimodal_n")]
    pub n: usize,
}

fn default_fixed_point_n() -> usize {
    10_000
}

fn default_unimodal_n() -> usize {
    10_000_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosestPairParams {
    pub n: usize,
    pub leaf_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrassenParams {
    pub n: usize,
    pub leaf_size: usize,
    pub max_value: i64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            seed: 42,
            karatsuba: KaratsubaParams::default(),
            inversions: InversionsParams::default(),
            fixed_point: FixedPointParams::default(),
            unimodal: UnimodalParams::default(),
            closest_pair: ClosestPairParams::default(),
            strassen: StrassenParams::default(),
        }
    }
}

impl Default for KaratsubaParams {
    fn default() -> Self {
        KaratsubaParams {
            x: "3141592653589793238462643383279502884197169399375105820974944592".to_string(),
            y: "2718281828459045235360287471352662497757247093699959574966967627".to_string(),
        }
    }
}

impl Default for InversionsParams {
    fn default() -> Self {
        InversionsParams {
            in_file: None,
            n: 1_000,
        }
    }
}

impl Default for FixedPointParams {
    fn default() -> Self {
        FixedPointParams {
            n: default_fixed_point_n(),
        }
    }
}

impl Default for UnimodalParams {
    fn default() -> Self {
        UnimodalParams {
            n: default_unimodal_n(),
        }
    }
}

impl Default for ClosestPairParams {
    fn default() -> Self {
        ClosestPairParams {
            n: 512,
            leaf_size: 2,
        }
    }
}

impl Default for StrassenParams {
    fn default() -> Self {
        StrassenParams {
            n: 128,
            leaf_size: 8,
            max_value: 100,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> DivconResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Reject parameter combinations the algorithms would refuse anyway,
    /// before any input is generated.
    pub fn validate(&self) -> DivconResult<()> {
        if self.karatsuba.x.is_empty() || self.karatsuba.y.is_empty() {
            return Err(DivconError::ConfigError(
                "karatsuba operands must be non-empty numerals".to_string(),
            ));
        }
        if self.inversions.n == 0 {
            return Err(DivconError::ConfigError(
                "inversions.n must be >= 1".to_string(),
            ));
        }
        if self.fixed_point.n == 0 || self.unimodal.n == 0 {
            return Err(DivconError::ConfigError(
                "search array sizes must be >= 1".to_string(),
            ));
        }
        if self.closest_pair.n < 2 {
            return Err(DivconError::ConfigError(
                "closest_pair.n must be >= 2".to_string(),
            ));
        }
        if self.closest_pair.leaf_size < 2 {
            return Err(DivconError::ConfigError(
                "closest_pair.leaf_size must be >= 2".to_string(),
            ));
        }
        if self.strassen.leaf_size < 1 {
            return Err(DivconError::ConfigError(
                "strassen.leaf_size must be >= 1".to_string(),
            ));
        }
        if !self.strassen.n.is_power_of_two() {
            return Err(DivconError::ConfigError(format!(
                "strassen.n must be a power of two, got {}",
                self.strassen.n
            )));
        }
        if self.strassen.max_value < 1 {
            return Err(DivconError::ConfigError(
                "strassen.max_value must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"seed": 7, "strassen": {"n": 64}, "unimodal": {}}"#)
                .expect("valid JSON");
        assert_eq!(config.seed, 7);
        assert_eq!(config.strassen.n, 64);
        assert_eq!(config.strassen.leaf_size, 8);
        assert_eq!(config.closest_pair.n, 512);
        assert_eq!(config.unimodal.n, 10_000_000);
    }

    #[test]
    fn test_validate_rejects_bad_leaf_sizes() {
        let mut config = RunConfig::default();
        config.closest_pair.leaf_size = 1;
        assert!(config.validate().is_err());

        let mut config = RunConfig::default();
        config.strassen.leaf_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_power_of_two_strassen() {
        let mut config = RunConfig::default();
        config.strassen.n = 96;
        assert!(config.validate().is_err());
    }
}
