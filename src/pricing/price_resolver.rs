use std::sync::Arc;

use bigdecimal::BigDecimal;
use log::{debug, warn};
use num_traits::{One, Zero};

use crate::{
    config::PricingConfig,
    models::{Pair, Token},
    store::{PairLookup, PairStore, TokenStore},
    utils::{canonical_id, is_zero_address},
};

/// Derives token prices in native-coin units through the whitelist.
///
/// Resolution order:
/// 1. Native token → 1
/// 2. Walk the whitelist in declared order; the first pair with the token on
///    one side and `reserve_native` above the threshold sets the price
/// 3. Nothing found → 0
///
/// Resolution is a single hop. The counter token's `derived_native` is used as
/// stored; the pipeline re-runs the resolver across tokens so those values
/// converge. No prices are cached between calls.
pub struct PriceResolver {
    config: Arc<PricingConfig>,
}

impl PriceResolver {
    pub fn new(config: Arc<PricingConfig>) -> Self {
        Self { config }
    }

    /// Price of `token` in native-coin units, or zero if no liquid whitelist pair exists.
    pub fn find_native_per_token<L, P, T>(
        &self,
        token: &Token,
        lookup: &L,
        pairs: &P,
        tokens: &T,
    ) -> BigDecimal
    where
        L: PairLookup + ?Sized,
        P: PairStore + ?Sized,
        T: TokenStore + ?Sized,
    {
        // Records built as struct literals or deserialized may carry mixed case
        let token_id = canonical_id(&token.id);
        if self.config.is_native(&token_id) {
            return BigDecimal::one();
        }

        for candidate in self.config.whitelist() {
            debug!("get pair {} {}", token_id, candidate);

            let Some(pair_address) = lookup.lookup_pair_address(&token_id, candidate) else {
                continue;
            };
            if is_zero_address(&pair_address) {
                continue;
            }

            let Some(pair) = pairs.load_pair(&pair_address) else {
                // Factory knows the pool but the store has not ingested it yet
                warn!(
                    "Pair {} for {}/{} missing from store, skipping",
                    pair_address, token_id, candidate
                );
                continue;
            };

            if let Some(price) = self.price_from_pair(&token_id, &pair, tokens) {
                return price;
            }
        }

        BigDecimal::zero()
    }

    /// Price `token` from one pair, if the pair contains it and is liquid enough.
    ///
    /// A missing counter-token record prices as zero.
    fn price_from_pair<T: TokenStore + ?Sized>(
        &self,
        token_id: &str,
        pair: &Pair,
        tokens: &T,
    ) -> Option<BigDecimal> {
        if !self.config.has_sufficient_liquidity(&pair.reserve_native) {
            debug!(
                "Pair {} below liquidity threshold ({} <= {})",
                pair.id,
                pair.reserve_native,
                self.config.minimum_liquidity_threshold()
            );
            return None;
        }

        // token1_price = token1 per 1 token0, token0_price = token0 per 1 token1
        let (counter_id, rate) = if pair.token0 == token_id {
            (&pair.token1, &pair.token1_price)
        } else if pair.token1 == token_id {
            (&pair.token0, &pair.token0_price)
        } else {
            warn!("Pair {} does not contain token {}", pair.id, token_id);
            return None;
        };

        let counter_native = match tokens.load_token(counter_id) {
            Some(counter) => counter.derived_native,
            None => {
                warn!("Token {} missing from store, pricing as 0", counter_id);
                BigDecimal::zero()
            }
        };

        Some(rate * counter_native)
    }
}
