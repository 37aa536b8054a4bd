//! Simulator configuration.
//!
//! A [`SimulatorConfig`] bundles everything needed to build a
//! [`FromCm`](crate::FromCm): the scheme label, the seed and the noise level.
//! It can be written by hand as JSON and loaded with [`SimulatorConfig::load`];
//! missing fields fall back to their defaults.
//!
//! ```json
//! { "scheme": "CM", "seed": 42, "noise_std": 0.03 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Standard deviation of the Gaussian noise added to each confusion-matrix row.
pub const DEFAULT_NOISE_STD: f64 = 0.03;

/// Scheme label used when none is given.
pub const DEFAULT_SCHEME: &str = "CM";

/// Settings for a confusion-matrix simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Name of the simulated classifier. Bookkeeping only.
    pub scheme: String,
    /// Seed for the simulator's random stream.
    pub seed: u64,
    /// Standard deviation of the per-entry Gaussian noise.
    pub noise_std: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            seed: 0,
            noise_std: DEFAULT_NOISE_STD,
        }
    }
}

impl SimulatorConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SimulationError::Config {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SimulationError::io(format!("reading {}", path.display()), e))?;
        Self::from_json(&contents)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| SimulationError::Config {
            message: e.to_string(),
        })?;
        std::fs::write(path, json)
            .map_err(|e| SimulationError::io(format!("writing {}", path.display()), e))
    }
}
