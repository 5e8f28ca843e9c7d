//! Address and decimal conversion helpers.
//!
//! Everything that crosses the configuration or snapshot boundary as a raw
//! string is normalised here, so the pricing code can compare ids with `==`.

use alloy::primitives::{hex, Address};
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

// ============================================
// Hex Encoding
// ============================================

/// Encode bytes as a lowercase hex string with 0x prefix.
pub fn hex_encode(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================
// Address Normalisation
// ============================================

/// Parse an address string and return it in canonical form (lowercase, 0x prefixed).
///
/// Accepts mixed-case (checksummed) input and input without the `0x` prefix.
pub fn normalize_address(address: &str) -> Result<String> {
    let parsed = Address::from_str(address.trim())
        .with_context(|| format!("Invalid address '{}'", address))?;
    Ok(hex_encode(parsed.as_slice()))
}

/// Lowercase an id without validating it.
///
/// Used by record constructors, where ids come from an upstream store that
/// already validated them but may not agree on letter case.
#[inline]
pub fn canonical_id(id: &str) -> String {
    id.trim().to_lowercase()
}

// ============================================
// Decimal Parsing
// ============================================

/// Parse a decimal string (e.g. "10", "0.5", "1e3") into a BigDecimal.
pub fn parse_decimal(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value.trim()).with_context(|| format!("Invalid decimal '{}'", value))
}
