//! Read-only capabilities the pricing core consumes from the surrounding pipeline.
//!
//! The pipeline owns persistence; the core only needs point lookups. Every
//! lookup returns `Option` so the degrade-to-zero policy is decided by the
//! caller, never by the store.

mod memory;
mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use crate::models::{Pair, Token};

/// Load pair records by pair id.
pub trait PairStore {
    fn load_pair(&self, id: &str) -> Option<Pair>;
}

/// Load token records by token id.
pub trait TokenStore {
    fn load_token(&self, id: &str) -> Option<Token>;
}

/// Resolve the pool address for a token pair, as an AMM factory's `getPair` does.
///
/// Implementations return `None` when no pool exists. Factories that report a
/// missing pool with the zero address may pass it through; the resolver treats
/// [`ZERO_ADDRESS`](crate::utils::ZERO_ADDRESS) the same as `None`.
pub trait PairLookup {
    fn lookup_pair_address(&self, token_a: &str, token_b: &str) -> Option<String>;
}
