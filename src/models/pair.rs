use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::utils::canonical_id;

/// AMM pair state as maintained by the indexing pipeline.
///
/// Primary Key: id (lowercase pair address)
///
/// ## Price Convention:
/// - token0_price = token0 per 1 token1
/// - token1_price = token1 per 1 token0
///
/// `reserve_native` is the pooled liquidity valued in native-coin units and
/// gates whether the pair is trusted for price discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub id: String,
    pub token0: String,
    pub token1: String,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,
    pub reserve_native: BigDecimal,
}

impl Pair {
    pub fn new(
        id: &str,
        token0: &str,
        token1: &str,
        token0_price: BigDecimal,
        token1_price: BigDecimal,
        reserve_native: BigDecimal,
    ) -> Self {
        Self {
            id: canonical_id(id),
            token0: canonical_id(token0),
            token1: canonical_id(token1),
            token0_price,
            token1_price,
            reserve_native,
        }
    }

    /// Lowercase every id. Records deserialized from a snapshot bypass `new`.
    pub fn normalized(mut self) -> Self {
        self.id = canonical_id(&self.id);
        self.token0 = canonical_id(&self.token0);
        self.token1 = canonical_id(&self.token1);
        self
    }
}
