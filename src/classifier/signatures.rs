//! Lookup tables for transaction classification.
//!
//! Selectors are the first four bytes of call data, stored lowercase and
//! without the `0x` prefix. Addresses are lowercase with the prefix.

/// transfer, transferFrom, totalSupply, balanceOf, allowance, approve
pub const ERC20_SELECTORS: [&str; 6] = [
    "a9059cbb", "23b872dd", "18160ddd", "70a08231", "dd62ed3e", "095ea7b3",
];

/// Mint and transfer variants seen on NFT contracts
pub const NFT_SELECTORS: [&str; 5] = ["1249c58b", "672a9400", "40c10f19", "449a52f8", "a140ae23"];

/// Known NFT marketplaces and collections
pub const NFT_CONTRACTS: [&str; 13] = [
    "0xaa84f7c9164db5c11b9fa65ad0118977c12a4729", // BlockArt storefront
    "0xb80fbf6cdb49c33dc6ae4ca11af8ac47b0b4c0f3", // BlockArt
    "0x495f947276749ce646f68ac8c248420045cb7b5e", // OpenSea Shared
    "0x60f80121c31a0d46b5279700f9df786054aa5ee5", // Rarible
    "0x3b3ee1931dc30c1957379fac9aba94d1c48a5405", // Foundation
    "0x2a46f2ffd99e19a89476e2f62270e0a35bbf0756", // MakersPlace
    "0xfbeef911dc5821886e1dda71586d90ed28174b7d", // Known Origin
    "0xa7d8d9ef8d8ce8992df33d8b8cf4aebabd5bd270", // Art Blocks Curated
    "0xb932a70a57673d89f4acffbe830e8ed7f75fb9e0", // SuperRare
    "0xb47e3cd837ddf8e4c57f05d70ab865de6e193bbb", // CryptoPunks
    "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d", // Bored Ape Yacht Club
    "0x06012c8cf97bead5deae237070f9587f8e7a266d", // CryptoKitties
    "0xf5b0a3efb8e8e4c201e2a935f110eaaf3ffecb8d", // Axie
];

/// Whether call data starts with `0x` followed by any of `selectors`
///
/// **Public** - case-insensitive prefix match
pub fn has_selector(call_data: &str, selectors: &[&str]) -> bool {
    let Some(body) = call_data
        .get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("0x"))
        .map(|_| &call_data[2..])
    else {
        return false;
    };

    selectors.iter().any(|selector| starts_with_ignore_case(body, selector))
}

/// Whether an address starts with one of the known NFT contracts
///
/// **Public** - prefix match, not equality
pub fn is_known_nft_contract(address: &str) -> bool {
    NFT_CONTRACTS
        .iter()
        .any(|contract| starts_with_ignore_case(address, contract))
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_selector() {
        assert!(has_selector("0xa9059cbb0000", &ERC20_SELECTORS));
        assert!(has_selector("0XA9059CBB", &ERC20_SELECTORS));
        assert!(!has_selector("a9059cbb", &ERC20_SELECTORS));
        assert!(!has_selector("0xa905", &ERC20_SELECTORS));
        assert!(!has_selector("", &ERC20_SELECTORS));
        assert!(!has_selector("0x", &NFT_SELECTORS));
    }

    #[test]
    fn test_has_selector_multibyte_input() {
        assert!(!has_selector("é", &ERC20_SELECTORS));
        assert!(!has_selector("0xa9059cbé", &ERC20_SELECTORS));
    }

    #[test]
    fn test_known_nft_contract_prefix_match() {
        assert!(is_known_nft_contract("0xBC4CA0EdA7647A8aB7C2061c2E118A18a936f13D"));
        // Longer strings still match on prefix
        assert!(is_known_nft_contract("0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d00"));
        assert!(!is_known_nft_contract("0xbc4ca0eda7647a8ab7c2061c2e118a18a936f1"));
        assert!(!is_known_nft_contract("0x7a250d5630b4cf539739df2c5dacb4c659f2488d"));
    }
}
