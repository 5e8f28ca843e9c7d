pub mod config;
pub mod models;
pub mod pricing;
pub mod store;
pub mod utils;

pub use crate::config::{PricingConfig, Settings};
pub use models::{Bundle, Pair, Token};
pub use pricing::{NativePriceOracle, PriceResolver, VolumeTracker};
pub use store::{MemoryStore, PairLookup, PairStore, Snapshot, TokenStore};
