//! Configuration and constants for the humanizer.

/// Current summary output schema version
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

// Big-integer fields are scaled from the smallest on-chain unit to a decimal
// unit assuming 18 decimals of precision (wei -> ether).
pub const WEI_PER_UNIT: f64 = 1_000_000_000_000_000_000.0;

pub const SECONDS_PER_HOUR: i64 = 3_600;

// Hex digits that fit losslessly in a u128 before falling back to scaling
pub const MAX_EXACT_HEX_DIGITS: usize = 32;

// Field names used when reporting decode failures
pub const VALUE_FIELD: &str = "value";
pub const GAS_PRICE_FIELD: &str = "gasPrice";
pub const GAS_LIMIT_FIELD: &str = "gasLimit";
