//! Transaction classification.
//!
//! Each transaction receives exactly one [`Category`]. Rules are evaluated in
//! priority order and the first match wins:
//! - ERC-20 style selector in the call data
//! - NFT selector, or a destination on the known NFT contract list
//! - Nonzero value
//! - Otherwise unrecognized

pub mod signatures;
pub mod transaction;

// Re-export main types and functions
pub use transaction::{classify_transaction, Category};
