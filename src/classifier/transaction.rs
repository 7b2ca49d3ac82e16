//! Per-transaction category assignment.

use super::signatures::{has_selector, is_known_nft_contract, ERC20_SELECTORS, NFT_SELECTORS};
use crate::parser::quantity::{decode_big_int_field, is_nonzero_hex};
use crate::parser::schema::EthTransaction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse semantic category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Token transfer (ERC-20 style call)
    Erc20,
    /// NFT interaction (mint/transfer call or known NFT contract)
    Nft,
    /// Plain value transfer
    Transfer,
    Unrecognized,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 4] = [
        Category::Erc20,
        Category::Nft,
        Category::Transfer,
        Category::Unrecognized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Erc20 => "erc20",
            Category::Nft => "nft",
            Category::Transfer => "transfer",
            Category::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign a category to a transaction
///
/// **Public** - main entry point for classification
///
/// Total and deterministic: the first matching rule wins, falling back to
/// [`Category::Unrecognized`].
pub fn classify_transaction(transaction: &EthTransaction) -> Category {
    let call_data = transaction.call_data();

    if is_erc20(call_data) {
        Category::Erc20
    } else if is_nft(call_data, transaction.to.as_deref()) {
        Category::Nft
    } else if is_transfer(transaction) {
        Category::Transfer
    } else {
        Category::Unrecognized
    }
}

fn is_erc20(call_data: &str) -> bool {
    has_selector(call_data, &ERC20_SELECTORS)
}

fn is_nft(call_data: &str, to: Option<&str>) -> bool {
    has_selector(call_data, &NFT_SELECTORS) || to.is_some_and(is_known_nft_contract)
}

fn is_transfer(transaction: &EthTransaction) -> bool {
    decode_big_int_field(transaction.value.as_ref()).is_some_and(is_nonzero_hex)
}
