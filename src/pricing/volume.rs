use std::sync::Arc;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    config::PricingConfig,
    models::{Bundle, Token},
    utils::{safe_div, TWO},
};

/// Whitelist-gated USD accounting for swaps and liquidity events.
///
/// Only amounts of whitelisted tokens count toward global USD totals, so
/// pools of unknown tokens cannot inflate volume with garbage prices.
pub struct VolumeTracker {
    config: Arc<PricingConfig>,
}

impl VolumeTracker {
    pub fn new(config: Arc<PricingConfig>) -> Self {
        Self { config }
    }

    /// USD price of one unit of `token` under the bundle's native price.
    pub fn token_price_usd(token: &Token, bundle: &Bundle) -> BigDecimal {
        &token.derived_native * &bundle.native_price_usd
    }

    /// Tracked USD volume of a swap.
    ///
    /// - Both whitelisted → average of both legs
    /// - One whitelisted → that leg's value
    /// - Neither → 0
    pub fn tracked_volume_usd(
        &self,
        bundle: &Bundle,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        let (leg0, leg1) = Self::legs_usd(bundle, amount0, token0, amount1, token1);

        match (
            self.config.is_whitelisted(&token0.id),
            self.config.is_whitelisted(&token1.id),
        ) {
            (true, true) => safe_div(&(leg0 + leg1), &TWO),
            (true, false) => leg0,
            (false, true) => leg1,
            (false, false) => BigDecimal::zero(),
        }
    }

    /// Tracked USD liquidity of a mint/burn or pool position.
    ///
    /// - Both whitelisted → sum of both legs
    /// - One whitelisted → double that leg (pool assumed balanced)
    /// - Neither → 0
    pub fn tracked_liquidity_usd(
        &self,
        bundle: &Bundle,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        let (leg0, leg1) = Self::legs_usd(bundle, amount0, token0, amount1, token1);

        match (
            self.config.is_whitelisted(&token0.id),
            self.config.is_whitelisted(&token1.id),
        ) {
            (true, true) => leg0 + leg1,
            (true, false) => leg0 * &*TWO,
            (false, true) => leg1 * &*TWO,
            (false, false) => BigDecimal::zero(),
        }
    }

    fn legs_usd(
        bundle: &Bundle,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> (BigDecimal, BigDecimal) {
        let price0 = Self::token_price_usd(token0, bundle);
        let price1 = Self::token_price_usd(token1, bundle);
        (amount0 * price0, amount1 * price1)
    }
}
