//! Pricing core: native coin USD price, derived token prices, tracked USD volume.
//!
//! - [`NativePriceOracle`] - native coin price in USD from the stable pair
//! - [`PriceResolver`] - token price in native units via the whitelist (one hop)
//! - [`VolumeTracker`] - whitelist-gated USD volume and liquidity
//!
//! Every component is stateless apart from its shared [`PricingConfig`](crate::PricingConfig)
//! and returns zero when a price cannot be determined.

mod native_price;
mod price_resolver;
mod volume;

pub use native_price::NativePriceOracle;
pub use price_resolver::PriceResolver;
pub use volume::VolumeTracker;
