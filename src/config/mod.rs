mod config;
mod pricing;

pub use self::config::{PricingSettings, ReplaySettings, Settings};
pub use self::pricing::PricingConfig;
