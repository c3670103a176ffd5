//! Wire types for the injected wallet provider.
//!
//! [`ChainParams`] matches the `wallet_addEthereumChain` parameter object
//! (EIP-3085) and [`TransactionRequest`] the `eth_sendTransaction` parameter
//! object. Field names must serialize exactly as the provider expects them,
//! hence the camelCase renames.

use serde::{Deserialize, Serialize};

/// Base mainnet chain id as a hex string (8453 in decimal).
pub const BASE_CHAIN_ID: &str = "0x2105";

/// Public RPC endpoint registered alongside the chain.
pub const BASE_RPC_URL: &str = "https://mainnet.base.org";

/// Block explorer registered alongside the chain.
pub const BASE_EXPLORER_URL: &str = "https://basescan.org";

/// Native currency metadata inside a `wallet_addEthereumChain` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// `wallet_addEthereumChain` parameter object (EIP-3085).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl ChainParams {
    /// Registration parameters for Base mainnet.
    pub fn base_mainnet() -> Self {
        Self {
            chain_id: BASE_CHAIN_ID.to_string(),
            chain_name: "Base".to_string(),
            native_currency: NativeCurrency {
                name: "ETH".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            rpc_urls: vec![BASE_RPC_URL.to_string()],
            block_explorer_urls: vec![BASE_EXPLORER_URL.to_string()],
        }
    }
}

/// `eth_sendTransaction` parameter object. Only the fields a plain value
/// transfer needs; gas estimation is left to the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    /// Amount in wei as a `0x`-prefixed hex string.
    pub value: String,
}

impl TransactionRequest {
    pub fn value_transfer(from: &str, to: &str, value_wei: u128) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            value: format!("{:#x}", value_wei),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_mainnet_params() {
        let params = ChainParams::base_mainnet();
        assert_eq!(params.chain_id, "0x2105");
        assert_eq!(params.native_currency.decimals, 18);
        assert_eq!(params.rpc_urls, vec!["https://mainnet.base.org"]);
        assert_eq!(params.block_explorer_urls, vec!["https://basescan.org"]);
    }

    #[test]
    fn test_chain_params_wire_format() {
        // The provider rejects snake_case keys, so pin the JSON shape.
        let json = serde_json::to_value(ChainParams::base_mainnet()).unwrap();
        assert_eq!(json["chainId"], "0x2105");
        assert_eq!(json["chainName"], "Base");
        assert_eq!(json["nativeCurrency"]["symbol"], "ETH");
        assert!(json["rpcUrls"].is_array());
        assert!(json["blockExplorerUrls"].is_array());
        assert!(json.get("chain_id").is_none());
    }

    #[test]
    fn test_value_transfer_hex_value() {
        let tx = TransactionRequest::value_transfer(
            "0x0000000000000000000000000000000000000001",
            "0x7E99075Ce287F1cF8cBCAaa6A1C7894e404fD7Ea",
            10_000_000_000_000_000,
        );
        // 0.01 ETH in wei
        assert_eq!(tx.value, "0x2386f26fc10000");
    }
}
