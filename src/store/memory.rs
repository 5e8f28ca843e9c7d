use bigdecimal::BigDecimal;
use rustc_hash::FxHashMap;

use super::{PairLookup, PairStore, TokenStore};
use crate::{
    models::{Pair, Token},
    utils::canonical_id,
};

/// In-memory token/pair store.
///
/// Pair addresses are indexed by the sorted token pair, so lookups are
/// symmetric in their arguments like a Uniswap V2 factory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tokens: FxHashMap<String, Token>,
    pairs: FxHashMap<String, Pair>,
    pair_index: FxHashMap<(String, String), String>,
}

fn sorted_key(token_a: &str, token_b: &str) -> (String, String) {
    let a = canonical_id(token_a);
    let b = canonical_id(token_b);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a token record.
    pub fn upsert_token(&mut self, token: Token) {
        self.tokens.insert(token.id.clone(), token);
    }

    /// Insert or replace a pair record and register it for address lookups.
    pub fn upsert_pair(&mut self, pair: Pair) {
        self.register_pair_address(&pair.token0, &pair.token1, &pair.id);
        self.pairs.insert(pair.id.clone(), pair);
    }

    /// Register a factory mapping without storing the pair record.
    ///
    /// Models a factory that knows about a pool the store has not ingested yet.
    pub fn register_pair_address(&mut self, token_a: &str, token_b: &str, pair_id: &str) {
        self.pair_index
            .insert(sorted_key(token_a, token_b), canonical_id(pair_id));
    }

    /// Write a resolver result back onto a token. Returns false if the token is unknown.
    pub fn set_derived_native(&mut self, token_id: &str, derived_native: BigDecimal) -> bool {
        match self.tokens.get_mut(&canonical_id(token_id)) {
            Some(token) => {
                token.derived_native = derived_native;
                true
            }
            None => false,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

impl PairStore for MemoryStore {
    fn load_pair(&self, id: &str) -> Option<Pair> {
        self.pairs.get(&canonical_id(id)).cloned()
    }
}

impl TokenStore for MemoryStore {
    fn load_token(&self, id: &str) -> Option<Token> {
        self.tokens.get(&canonical_id(id)).cloned()
    }
}

impl PairLookup for MemoryStore {
    fn lookup_pair_address(&self, token_a: &str, token_b: &str) -> Option<String> {
        self.pair_index.get(&sorted_key(token_a, token_b)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    const TOKEN_A: &str = "0xc42c30ac6cc15fac9bd938618bcaa1a1fae8501d";
    const TOKEN_B: &str = "0xb12bfca5a55806aaf64e99521918a4bf0fc40802";
    const PAIR: &str = "0x20f8aefb5697b77e0bb835a8518be70775cda1b0";

    #[test]
    fn test_lookup_is_symmetric_and_case_insensitive() {
        let mut store = MemoryStore::new();
        store.upsert_pair(Pair::new(
            PAIR,
            TOKEN_A,
            TOKEN_B,
            BigDecimal::one(),
            BigDecimal::one(),
            BigDecimal::zero(),
        ));

        assert_eq!(store.lookup_pair_address(TOKEN_A, TOKEN_B).as_deref(), Some(PAIR));
        assert_eq!(store.lookup_pair_address(TOKEN_B, TOKEN_A).as_deref(), Some(PAIR));
        assert_eq!(
            store
                .lookup_pair_address(&TOKEN_A.to_uppercase().replace("0X", "0x"), TOKEN_B)
                .as_deref(),
            Some(PAIR)
        );
        assert!(store.load_pair(&PAIR.to_uppercase().replace("0X", "0x")).is_some());
    }

    #[test]
    fn test_registered_address_without_record() {
        let mut store = MemoryStore::new();
        store.register_pair_address(TOKEN_A, TOKEN_B, PAIR);

        assert_eq!(store.lookup_pair_address(TOKEN_A, TOKEN_B).as_deref(), Some(PAIR));
        assert!(store.load_pair(PAIR).is_none());
        assert_eq!(store.pair_count(), 0);
    }

    #[test]
    fn test_set_derived_native() {
        let mut store = MemoryStore::new();
        store.upsert_token(Token::unpriced(TOKEN_A, "WNEAR"));

        assert!(store.set_derived_native(TOKEN_A, BigDecimal::from(3)));
        assert!(!store.set_derived_native(TOKEN_B, BigDecimal::from(3)));
        assert_eq!(store.load_token(TOKEN_A).unwrap().derived_native, BigDecimal::from(3));
        assert_eq!(store.token_count(), 1);
    }
}
