use bigdecimal::BigDecimal;
use log::info;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{pricing::NativePriceOracle, store::PairStore};

/// Process-wide snapshot of the native coin USD price.
///
/// Refreshed once per processing cycle and read by every tracked volume and
/// liquidity computation in that cycle. Zero means "no price available".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub native_price_usd: BigDecimal,
}

impl Default for Bundle {
    fn default() -> Self {
        Self {
            native_price_usd: BigDecimal::zero(),
        }
    }
}

impl Bundle {
    pub fn new(native_price_usd: BigDecimal) -> Self {
        Self { native_price_usd }
    }

    /// Re-read the native coin price from the oracle.
    pub fn refresh<P: PairStore + ?Sized>(&mut self, oracle: &NativePriceOracle, pairs: &P) {
        self.native_price_usd = oracle.native_price_usd(pairs);
        info!("Bundle refreshed: native price = ${}", self.native_price_usd);
    }

    /// Returns true when the oracle could not produce a price.
    pub fn is_unpriced(&self) -> bool {
        self.native_price_usd.is_zero()
    }
}
