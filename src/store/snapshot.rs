use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::MemoryStore;
use crate::{
    models::{Pair, Token},
    utils::canonical_id,
};

/// Point-in-time dump of pipeline state: `{ "tokens": [...], "pairs": [...] }`.
///
/// Decimal fields are strings ("0.3125") to keep full precision.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub pairs: Vec<Pair>,
}

impl Snapshot {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse snapshot {}", path))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        Ok(snapshot)
    }

    /// Token ids in snapshot order, lowercased.
    pub fn token_ids(&self) -> Vec<String> {
        self.tokens.iter().map(|t| canonical_id(&t.id)).collect()
    }

    pub fn into_store(self) -> MemoryStore {
        let mut store = MemoryStore::new();
        for mut token in self.tokens {
            token.id = canonical_id(&token.id);
            store.upsert_token(token);
        }
        for pair in self.pairs {
            store.upsert_pair(pair.normalized());
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{PairLookup, PairStore, TokenStore};
    use bigdecimal::BigDecimal;
    use num_traits::Zero;
    use std::str::FromStr;

    const JSON: &str = r#"{
        "tokens": [
            { "id": "0xC42C30aC6Cc15faC9bD938618BcaA1a1FaE8501d", "symbol": "WNEAR", "derived_native": "1" },
            { "id": "0xb12bfca5a55806aaf64e99521918a4bf0fc40802", "symbol": "USDC" }
        ],
        "pairs": [
            {
                "id": "0x20F8AEFB5697B77E0BB835A8518BE70775CDA1B0",
                "token0": "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d",
                "token1": "0xB12BFCA5A55806AAF64E99521918A4BF0FC40802",
                "token0_price": "0.3125",
                "token1_price": "3.2",
                "reserve_native": "250000"
            }
        ]
    }"#;

    #[test]
    fn test_snapshot_into_store_normalizes_ids() {
        let snapshot = Snapshot::from_json(JSON).unwrap();
        assert_eq!(
            snapshot.token_ids()[0],
            "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d"
        );

        let store = snapshot.into_store();
        let wnear = store
            .load_token("0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d")
            .unwrap();
        assert_eq!(wnear.derived_native, BigDecimal::from(1));

        let usdc = store
            .load_token("0xb12bfca5a55806aaf64e99521918a4bf0fc40802")
            .unwrap();
        assert!(usdc.derived_native.is_zero());

        let pair_id = store
            .lookup_pair_address(
                "0xb12bfca5a55806aaf64e99521918a4bf0fc40802",
                "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d",
            )
            .unwrap();
        let pair = store.load_pair(&pair_id).unwrap();
        assert_eq!(pair.token1_price, BigDecimal::from_str("3.2").unwrap());
    }

    #[test]
    fn test_snapshot_rejects_malformed_json() {
        assert!(Snapshot::from_json("{ \"tokens\": [ { \"symbol\": \"X\" } ] }").is_err());
        assert!(Snapshot::from_file("/nonexistent/snapshot.json").is_err());
    }
}
