use std::sync::Arc;

use bigdecimal::BigDecimal;
use log::info;
use num_traits::Zero;

use crate::{config::PricingConfig, store::PairStore};

/// Resolves the native coin USD price from the configured stable pair.
///
/// The stable pair is configured with the native coin as token0 and the
/// stablecoin as token1, so `token1_price` (stable per native) is the USD price.
pub struct NativePriceOracle {
    config: Arc<PricingConfig>,
}

impl NativePriceOracle {
    pub fn new(config: Arc<PricingConfig>) -> Self {
        Self { config }
    }

    /// Native coin price in USD, or zero when the stable pair has not been ingested.
    ///
    /// The pair's `token1_price` is returned as stored, with no rounding.
    pub fn native_price_usd<P: PairStore + ?Sized>(&self, pairs: &P) -> BigDecimal {
        match pairs.load_pair(self.config.stable_pair()) {
            Some(pair) => {
                info!(
                    "Stable pair {} prices: token0={}, token1={}",
                    pair.id, pair.token0_price, pair.token1_price
                );
                pair.token1_price
            }
            None => {
                info!(
                    "Stable pair {} not found, native price = 0",
                    self.config.stable_pair()
                );
                BigDecimal::zero()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Pair, store::MemoryStore};
    use std::str::FromStr;

    const WNEAR: &str = "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d";
    const USDC: &str = "0xb12bfca5a55806aaf64e99521918a4bf0fc40802";
    const STABLE_PAIR: &str = "0x20f8aefb5697b77e0bb835a8518be70775cda1b0";

    fn oracle() -> NativePriceOracle {
        let config =
            PricingConfig::new(WNEAR, STABLE_PAIR, &[WNEAR, USDC], BigDecimal::from(10)).unwrap();
        NativePriceOracle::new(Arc::new(config))
    }

    #[test]
    fn test_missing_stable_pair_returns_zero() {
        let store = MemoryStore::new();
        assert!(oracle().native_price_usd(&store).is_zero());
    }

    #[test]
    fn test_returns_token1_price_verbatim() {
        let price = BigDecimal::from_str("3.141592653589793238462643383279").unwrap();
        let mut store = MemoryStore::new();
        store.upsert_pair(Pair::new(
            STABLE_PAIR,
            WNEAR,
            USDC,
            BigDecimal::from_str("0.318").unwrap(),
            price.clone(),
            BigDecimal::from(5_000),
        ));

        let result = oracle().native_price_usd(&store);
        assert_eq!(result, price);
        assert_eq!(result.to_string(), price.to_string());
    }

    #[test]
    fn test_ignores_liquidity_threshold() {
        // The stable pair is trusted by configuration, not by its reserves
        let mut store = MemoryStore::new();
        store.upsert_pair(Pair::new(
            STABLE_PAIR,
            WNEAR,
            USDC,
            BigDecimal::from_str("0.5").unwrap(),
            BigDecimal::from(2),
            BigDecimal::zero(),
        ));

        assert_eq!(oracle().native_price_usd(&store), BigDecimal::from(2));
    }

    #[test]
    fn test_native_price_is_idempotent() {
        let mut store = MemoryStore::new();
        let oracle = oracle();
        assert_eq!(oracle.native_price_usd(&store), oracle.native_price_usd(&store));

        store.upsert_pair(Pair::new(
            STABLE_PAIR,
            WNEAR,
            USDC,
            BigDecimal::from_str("0.25").unwrap(),
            BigDecimal::from_str("4.00").unwrap(),
            BigDecimal::from(5_000),
        ));
        let first = oracle.native_price_usd(&store);
        let second = oracle.native_price_usd(&store);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
