use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::utils::canonical_id;

/// Token record as maintained by the indexing pipeline.
///
/// Primary Key: id (lowercase token address)
///
/// `derived_native` is the token price in native-coin units. The pipeline
/// writes it back after each resolver run; the pricing core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default = "BigDecimal::zero")]
    pub derived_native: BigDecimal,
}

impl Token {
    pub fn new(id: &str, symbol: &str, derived_native: BigDecimal) -> Self {
        Self {
            // Always lowercase addresses for consistent comparisons
            id: canonical_id(id),
            symbol: symbol.to_string(),
            derived_native,
        }
    }

    /// A freshly observed token with no price yet.
    pub fn unpriced(id: &str, symbol: &str) -> Self {
        Self::new(id, symbol, BigDecimal::zero())
    }
}
