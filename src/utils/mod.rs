//! Utility functions for the pricing core.
//!
//! - [`conversion`] - Address normalisation and decimal parsing
//! - [`decimal`] - Zero-safe decimal arithmetic

mod conversion;
mod decimal;

// ============================================
// Common Constants
// ============================================

/// The Ethereum zero address (0x0000000000000000000000000000000000000000)
/// Returned by pair factories when no pool exists for a token pair.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Returns true when `address` is the zero-address sentinel.
#[inline]
pub fn is_zero_address(address: &str) -> bool {
    address.eq_ignore_ascii_case(ZERO_ADDRESS)
}

// ============================================
// Re-exports
// ============================================

pub use conversion::{canonical_id, hex_encode, normalize_address, parse_decimal};
pub use decimal::safe_div;
pub(crate) use decimal::TWO;
