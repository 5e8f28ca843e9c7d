use anyhow::{bail, Context, Result};
use bigdecimal::BigDecimal;
use num_traits::Signed;
use rustc_hash::FxHashSet;

use super::PricingSettings;
use crate::utils::{canonical_id, normalize_address, parse_decimal};

/// Validated pricing constants, shared read-only by every pricing component.
///
/// All addresses are stored lowercase and `0x` prefixed; ids passed to the
/// membership checks are lowercased first. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    native_token: String,
    stable_pair: String,
    whitelist: Vec<String>,
    whitelist_set: FxHashSet<String>,
    minimum_liquidity_threshold: BigDecimal,
}

impl PricingConfig {
    pub fn new(
        native_token: &str,
        stable_pair: &str,
        whitelist: &[&str],
        minimum_liquidity_threshold: BigDecimal,
    ) -> Result<Self> {
        let native_token = normalize_address(native_token).context("native_token")?;
        let stable_pair = normalize_address(stable_pair).context("stable_pair")?;

        if whitelist.is_empty() {
            bail!("whitelist must contain at least one token");
        }
        if minimum_liquidity_threshold.is_negative() {
            bail!(
                "minimum_liquidity_threshold must not be negative, got {}",
                minimum_liquidity_threshold
            );
        }

        let mut ordered = Vec::with_capacity(whitelist.len());
        let mut whitelist_set = FxHashSet::default();
        for entry in whitelist {
            let address = normalize_address(entry).context("whitelist")?;
            if !whitelist_set.insert(address.clone()) {
                bail!("duplicate whitelist entry {}", address);
            }
            ordered.push(address);
        }

        Ok(Self {
            native_token,
            stable_pair,
            whitelist: ordered,
            whitelist_set,
            minimum_liquidity_threshold,
        })
    }

    pub fn from_settings(settings: &PricingSettings) -> Result<Self> {
        let threshold = parse_decimal(&settings.minimum_liquidity_threshold)
            .context("minimum_liquidity_threshold")?;
        let whitelist: Vec<&str> = settings.whitelist.iter().map(String::as_str).collect();

        Self::new(&settings.native_token, &settings.stable_pair, &whitelist, threshold)
    }

    pub fn native_token(&self) -> &str {
        &self.native_token
    }

    pub fn stable_pair(&self) -> &str {
        &self.stable_pair
    }

    /// Whitelist in declared search order.
    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    pub fn minimum_liquidity_threshold(&self) -> &BigDecimal {
        &self.minimum_liquidity_threshold
    }

    pub fn is_native(&self, token: &str) -> bool {
        self.native_token == canonical_id(token)
    }

    /// Check if a token is on the whitelist. Letter case is ignored.
    pub fn is_whitelisted(&self, token: &str) -> bool {
        self.whitelist_set.contains(&canonical_id(token))
    }

    /// Liquidity gate: strictly above the threshold.
    pub fn has_sufficient_liquidity(&self, reserve_native: &BigDecimal) -> bool {
        reserve_native > &self.minimum_liquidity_threshold
    }
}
