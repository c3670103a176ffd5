//! Wallet state management

use leptos::prelude::*;
use shared::utils::truncate_address;

/// Wallet connection state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Label for the connect-wallet button.
    pub fn button_label(&self) -> String {
        match self {
            WalletState::Disconnected => "Connect Wallet".to_string(),
            WalletState::Connecting => "Connecting...".to_string(),
            WalletState::Connected { address } => truncate_address(address),
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    provider_initialized: RwSignal<bool>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            provider_initialized: RwSignal::new(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn is_connected_untracked(&self) -> bool {
        self.wallet.with_untracked(|state| state.is_connected())
    }

    pub fn address_untracked(&self) -> Option<String> {
        self.wallet
            .with_untracked(|state| state.address().map(|s| s.to_string()))
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, address: String) {
        self.wallet.set(WalletState::Connected { address });
    }

    pub fn disconnect(&self) {
        self.wallet.set(WalletState::Disconnected);
    }

    /// One-shot guard for provider setup. True exactly once.
    pub fn mark_provider_initialized(&self) -> bool {
        if self.provider_initialized.get_untracked() {
            return false;
        }
        self.provider_initialized.set(true);
        true
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_label_truncates_the_address() {
        let state = WalletState::Connected {
            address: "0xAbCdEf1234567890000000000000000000000042".to_string(),
        };
        assert_eq!(state.button_label(), "0xAbCd...0042");
    }

    #[test]
    fn test_disconnected_label_is_connect_wallet() {
        assert_eq!(WalletState::Disconnected.button_label(), "Connect Wallet");
        assert!(!WalletState::Disconnected.is_connected());
        assert_eq!(WalletState::Disconnected.address(), None);
    }
}
