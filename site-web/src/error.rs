//! Wallet error types.
//!
//! Every provider failure is classified here once and surfaced to the user as
//! a single notification at the call site. Nothing propagates past the UI
//! action that triggered it and nothing retries automatically.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalletError>;

/// EIP-1193: user rejected the request.
pub const CODE_USER_REJECTED: i64 = 4001;

/// EIP-3085: the requested chain has not been added to the wallet.
pub const CODE_UNKNOWN_CHAIN: i64 = 4902;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("No wallet extension detected")]
    ProviderUnavailable,

    #[error("Request rejected in the wallet")]
    UserRejected,

    #[error("The Base network is not registered in the wallet")]
    UnknownChain,

    #[error("Wallet provider error: {0}")]
    Provider(String),

    #[error("Connect your wallet first")]
    NotConnected,

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("The wallet did not respond in time")]
    Timeout,
}

impl WalletError {
    /// Classify a raw provider error by its EIP-1193 error code.
    pub fn from_provider(code: Option<i64>, message: String) -> Self {
        match code {
            Some(CODE_USER_REJECTED) => WalletError::UserRejected,
            Some(CODE_UNKNOWN_CHAIN) => WalletError::UnknownChain,
            _ => WalletError::Provider(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_code() {
        let err = WalletError::from_provider(Some(4001), "User rejected the request.".into());
        assert_eq!(err, WalletError::UserRejected);
    }

    #[test]
    fn test_unknown_chain_code() {
        let err = WalletError::from_provider(Some(4902), "Unrecognized chain ID".into());
        assert_eq!(err, WalletError::UnknownChain);
    }

    #[test]
    fn test_other_codes_keep_the_message() {
        let err = WalletError::from_provider(Some(-32603), "Internal JSON-RPC error.".into());
        assert_eq!(err, WalletError::Provider("Internal JSON-RPC error.".into()));

        let err = WalletError::from_provider(None, "boom".into());
        assert_eq!(err, WalletError::Provider("boom".into()));
    }
}
