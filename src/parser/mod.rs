//! Block parsing and input schema definitions.
//!
//! This module handles:
//! - Deserializing ethers-style and JSON-RPC block JSON
//! - Resolving big-integer fields spelled under either `hex` or `_hex`
//! - Decoding hex quantities into decimal units

pub mod block;
pub mod quantity;
pub mod schema;

// Re-export main types
pub use block::{parse_block, parse_block_str, read_block};
pub use quantity::{decode_big_int_field, hex_to_decimal, hex_to_f64, is_nonzero_hex};
pub use schema::{BigNumber, EthBlock, EthTransaction};
