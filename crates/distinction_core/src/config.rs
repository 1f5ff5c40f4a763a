//! Configuration for the growth driver and snapshot cadence.
//!
//! The synthesis rule itself is parameter-free; configuration only shapes
//! the external growth driver (how many steps, which pair-selection
//! strategy, which seed) and where snapshots land on disk. Values map to
//! `config.toml` with hardcoded defaults as fallback.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [growth]
//! steps = 2000
//! seed = 42
//! strategy = "degree-weighted"
//! report_interval = 200
//!
//! [output]
//! snapshot_path = "logs/universe.json"
//! snapshot_interval = 1000
//! ```

use serde::{Deserialize, Serialize};

/// Pair-selection strategy used by the growth driver.
///
/// Selection is an external concern: the engine accepts any registered pair
/// and the strategy only decides which pair to propose next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PairStrategy {
    /// Uniform selection over all registered distinctions.
    #[default]
    Random,
    /// Selection weighted by current degree plus one, so never-connected
    /// distinctions remain reachable.
    DegreeWeighted,
}

/// Growth-run parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GrowthConfig {
    pub steps: u64,
    pub seed: u64,
    pub strategy: PairStrategy,
    pub report_interval: u64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            seed: 42,
            strategy: PairStrategy::Random,
            report_interval: 100,
        }
    }
}

/// Snapshot output parameters. `snapshot_interval` of zero means only the
/// final snapshot is written.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutputConfig {
    pub snapshot_path: String,
    pub snapshot_interval: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: "logs/universe.json".to_string(),
            snapshot_interval: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    pub growth: GrowthConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.growth.steps > 0, "Growth steps must be positive");
        anyhow::ensure!(
            self.growth.steps <= 10_000_000,
            "Growth steps too large (max 10000000)"
        );
        anyhow::ensure!(
            self.growth.report_interval > 0,
            "Report interval must be positive"
        );
        anyhow::ensure!(
            !self.output.snapshot_path.is_empty(),
            "Snapshot path must not be empty"
        );
        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Digest of the parameters that shape a run, used to tag runs with
    /// their configuration.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.growth).as_bytes());
        hasher.update(format!("{:?}", self.output).as_bytes());
        hex::encode(hasher.finalize())
    }
}
