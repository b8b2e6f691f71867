//! Simulation run configuration
//!
//! ```rust
//! use bracket_core::config::SimulationConfig;
//!
//! let config = SimulationConfig::default();
//! let quick = SimulationConfig::quick().with_seed(42);
//! assert!(quick.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimulationError};

pub const DEFAULT_TRIALS: u64 = 10_000;
pub const DEFAULT_PRECISION: u32 = 4;
pub const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Monte Carlo trials. Zero is allowed in files (skip aggregation) but
    /// rejected by `validate`.
    pub trials: u64,
    /// Base seed. Trial `i` draws from ChaCha stream `i` of this seed; `None`
    /// picks one at random (and logs it).
    pub seed: Option<u64>,
    /// Spread trials over the rayon pool
    pub parallel: bool,
    /// Decimal places kept in reported probabilities
    pub precision: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl SimulationConfig {
    /// Fast preview run
    pub fn quick() -> Self {
        Self {
            trials: 1_000,
            ..Self::default()
        }
    }

    /// Fixed seed, single thread. Used by tests.
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SimulationError::InvalidConfig(
                "trials must be at least 1".into(),
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(SimulationError::InvalidConfig(format!(
                "precision {} exceeds {} decimals",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.trials, 10_000);
        assert_eq!(config.precision, 4);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let err = SimulationConfig::default().with_trials(0).validate().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfig(_)));
    }

    #[test]
    fn test_precision_bound() {
        let config = SimulationConfig {
            precision: 11,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SimulationConfig::from_json(r#"{"trials": 500, "seed": 9}"#).unwrap();
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(9));
        assert!(config.parallel);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = SimulationConfig::from_json("{trials: }").unwrap_err();
        assert!(matches!(err, SimulationError::Serialization(_)));
    }
}
