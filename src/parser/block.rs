//! Block ingestion from raw JSON.
//!
//! Accepts a bare block object or a JSON-RPC response envelope whose
//! `result` holds the block.

use super::schema::EthBlock;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a block from a JSON value
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::InvalidFormat` - Not an object, or an RPC error envelope
/// * `ParseError::JsonError` - Object does not match the block schema
pub fn parse_block(raw: &serde_json::Value) -> Result<EthBlock, ParseError> {
    let block_value = unwrap_envelope(raw)?;

    let block: EthBlock = serde_json::from_value(block_value.clone())?;

    debug!(
        "Parsed block {} with {} transactions",
        block.number,
        block.transactions.len()
    );

    Ok(block)
}

/// Parse a block from a JSON string
pub fn parse_block_str(input: &str) -> Result<EthBlock, ParseError> {
    let raw: serde_json::Value = serde_json::from_str(input)?;
    parse_block(&raw)
}

/// Read and parse a block JSON file
///
/// **Public** - used by the CLI commands
pub fn read_block(input_path: impl AsRef<Path>) -> Result<EthBlock, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading block from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_block(&raw)
}

/// Strip a JSON-RPC envelope if present
///
/// **Private** - internal helper for parse_block
fn unwrap_envelope(raw: &serde_json::Value) -> Result<&serde_json::Value, ParseError> {
    let obj = raw.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("Block must be a JSON object".to_string())
    })?;

    if obj.contains_key("jsonrpc") {
        if let Some(error) = obj.get("error").filter(|e| !e.is_null()) {
            return Err(ParseError::InvalidFormat(format!("RPC error response: {}", error)));
        }

        debug!("Block is wrapped in a JSON-RPC envelope, unwrapping result");
        return match obj.get("result") {
            Some(result) if result.is_object() => Ok(result),
            _ => Err(ParseError::InvalidFormat(
                "JSON-RPC response has no block result".to_string(),
            )),
        };
    }

    Ok(raw)
}
