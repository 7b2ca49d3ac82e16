//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding transaction or block fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid hex value for {field}: {value:?}")]
    InvalidHex { field: String, value: String },

    #[error("Missing field {field} in transaction {hash}")]
    MissingField { field: String, hash: String },

    #[error("Timestamp {0} cannot be represented as a calendar date")]
    TimestampOutOfRange(i64),
}

/// Errors that can occur while ingesting block JSON
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid block format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read block file: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::InvalidHex {
            field: "value".to_string(),
            value: "0xzz".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid hex value for value: \"0xzz\"");

        let err = DecodeError::MissingField {
            field: "gasPrice".to_string(),
            hash: "0xabc".to_string(),
        };
        assert_eq!(err.to_string(), "Missing field gasPrice in transaction 0xabc");
    }
}
