use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Pricing constants for one deployment.
///
/// Values stay as raw strings here; [`PricingConfig`](super::PricingConfig)
/// validates and normalises them.
#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    /// Wrapped native coin token address (priced at exactly 1 native unit)
    pub native_token: String,
    /// Pair whose token1Price is the native coin USD price (token0 = native, token1 = stable)
    pub stable_pair: String,
    /// Reference tokens, in search order. Order decides which pair prices a token.
    pub whitelist: Vec<String>,
    /// Minimum `reserve_native` (exclusive) for a pair to be trusted for pricing
    #[serde(default = "default_minimum_liquidity_threshold")]
    pub minimum_liquidity_threshold: String,
}

fn default_minimum_liquidity_threshold() -> String {
    "10".to_string()
}

/// Snapshot replay configuration for the `amm-pricing` binary.
#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySettings {
    /// JSON file holding `tokens` and `pairs` arrays
    pub snapshot_path: String,
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub pricing: PricingSettings,
    #[serde(default)]
    pub replay: Option<ReplaySettings>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from a config file; the extension may be omitted.
    pub fn from_file(name: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(name))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
