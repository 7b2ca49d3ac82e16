//! Input schema for blocks and transactions.
//!
//! Mirrors the shape produced by ethers-style providers, where big integers
//! arrive as `{ "type": "BigNumber", "hex": "0x..", "_hex": "0x.." }`, and
//! also accepts the plain JSON-RPC spelling where they are bare hex strings.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A big-integer field encoded as hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BigNumber {
    /// Bare JSON-RPC quantity, e.g. `"0x1d326c2600"`
    Raw(String),

    /// ethers-style object with a canonical and a legacy hex field
    Object {
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        kind: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        hex: Option<String>,

        #[serde(default, rename = "_hex", skip_serializing_if = "Option::is_none")]
        legacy_hex: Option<String>,
    },
}

impl BigNumber {
    /// Build the ethers-style object with both spellings populated
    pub fn from_hex(hex: impl Into<String>) -> Self {
        let hex = hex.into();
        BigNumber::Object {
            kind: Some("BigNumber".to_string()),
            hex: Some(hex.clone()),
            legacy_hex: Some(hex),
        }
    }

    /// Build an object that only carries the legacy `_hex` spelling
    pub fn legacy(hex: impl Into<String>) -> Self {
        BigNumber::Object {
            kind: Some("BigNumber".to_string()),
            hex: None,
            legacy_hex: Some(hex.into()),
        }
    }
}

/// A single transaction as it appears inside a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    /// Transaction hash
    #[serde(default)]
    pub hash: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Destination address (absent for contract creation)
    #[serde(default)]
    pub to: Option<String>,

    /// Call data (ethers spelling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Call data (JSON-RPC spelling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(default)]
    pub value: Option<BigNumber>,

    #[serde(default)]
    pub gas_price: Option<BigNumber>,

    #[serde(default)]
    pub gas_limit: Option<BigNumber>,

    /// Gas limit (JSON-RPC spelling)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<BigNumber>,
}

impl EthTransaction {
    /// Call data, falling back to `input` when `data` is absent
    pub fn call_data(&self) -> &str {
        self.data
            .as_deref()
            .or(self.input.as_deref())
            .unwrap_or_default()
    }

    /// Gas limit field, falling back to `gas` when `gasLimit` is absent
    pub fn gas_limit_field(&self) -> Option<&BigNumber> {
        self.gas_limit.as_ref().or(self.gas.as_ref())
    }
}

/// A block with its full transaction objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthBlock {
    #[serde(deserialize_with = "deserialize_block_number")]
    pub number: u64,

    /// UNIX timestamp in seconds
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miner: Option<String>,

    /// On-chain ordered transactions; `null` or missing reads as empty
    #[serde(default, deserialize_with = "deserialize_transactions")]
    pub transactions: Vec<EthTransaction>,
}

/// Numeric block header field as a JSON number or a hex/decimal string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Int(i64),
    Text(String),
}

impl RawQuantity {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            RawQuantity::Int(n) => Ok(n),
            RawQuantity::Text(s) => parse_quantity(&s),
        }
    }
}

/// Parse a header quantity from hex (`0x` prefix) or decimal
fn parse_quantity(value: &str) -> Result<i64, String> {
    if let Some(hex_str) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        i64::from_str_radix(hex_str, 16)
            .map_err(|e| format!("Invalid hex quantity {:?}: {}", value, e))
    } else {
        value
            .parse::<i64>()
            .map_err(|e| format!("Invalid decimal quantity {:?}: {}", value, e))
    }
}

fn deserialize_block_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawQuantity::deserialize(deserializer)?
        .into_i64()
        .map_err(de::Error::custom)?;
    u64::try_from(raw).map_err(|_| de::Error::custom(format!("Negative block number: {}", raw)))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawQuantity::deserialize(deserializer)?
        .into_i64()
        .map_err(de::Error::custom)
}

fn deserialize_transactions<'de, D>(deserializer: D) -> Result<Vec<EthTransaction>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EthTransaction>>::deserialize(deserializer)?.unwrap_or_default())
}
