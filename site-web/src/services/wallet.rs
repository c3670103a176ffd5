//! Wallet connection flow
//!
//! Connect, chain selection, and provider event wiring. Every failure ends
//! as exactly one notification at this layer; callers never see an error.

use shared::chain::{ChainParams, BASE_CHAIN_ID};
use shared::utils::truncate_address;

use crate::error::{Result, WalletError};
use crate::services::provider;
use crate::state::notify::NotifyContext;
use crate::state::wallet::WalletContext;

/// Map an error to the severity the user should see.
pub fn report_wallet_error(notify: NotifyContext, err: &WalletError) {
    match err {
        WalletError::UserRejected | WalletError::NotConnected => notify.warning(err.to_string()),
        _ => notify.error(err.to_string()),
    }
}

/// Request account access and select the Base chain.
///
/// A chain-switch failure is non-fatal: the connection completes with a
/// warning and the purchase path re-checks the chain before submitting.
pub async fn connect(wallet: WalletContext, notify: NotifyContext) {
    if !provider::provider_available() {
        notify.error("MetaMask is not installed");
        return;
    }

    wallet.set_connecting();
    match provider::request_accounts().await {
        Ok(accounts) => {
            let Some(address) = accounts.into_iter().next() else {
                wallet.disconnect();
                notify.warning("No account authorized");
                return;
            };
            if let Err(e) = ensure_expected_chain().await {
                log::warn!("chain selection failed: {}", e);
                notify.warning("Could not switch to the Base network");
            }
            log::info!("wallet connected: {}", truncate_address(&address));
            wallet.set_connected(address);
            notify.success("Wallet connected successfully");
        }
        Err(e) => {
            wallet.disconnect();
            log::error!("wallet connection failed: {}", e);
            report_wallet_error(notify, &e);
        }
    }
}

/// Chain selection calls behind a seam, so the switch/register/retry
/// ordering can be exercised without a browser provider.
trait ChainApi {
    async fn chain_id(&self) -> Result<String>;
    async fn switch_chain(&self, chain_id: &str) -> Result<()>;
    async fn add_chain(&self, params: &ChainParams) -> Result<()>;
}

/// The injected `window.ethereum` provider.
struct BrowserProvider;

impl ChainApi for BrowserProvider {
    async fn chain_id(&self) -> Result<String> {
        provider::chain_id().await
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<()> {
        provider::switch_chain(chain_id).await
    }

    async fn add_chain(&self, params: &ChainParams) -> Result<()> {
        provider::add_chain(params).await
    }
}

/// Make sure the wallet is on Base. When the chain is unknown to the wallet
/// (code 4902), register it first and retry the switch once.
pub async fn ensure_expected_chain() -> Result<()> {
    ensure_chain(&BrowserProvider).await
}

async fn ensure_chain<A: ChainApi>(api: &A) -> Result<()> {
    let current = api.chain_id().await?;
    if current == BASE_CHAIN_ID {
        return Ok(());
    }

    match api.switch_chain(BASE_CHAIN_ID).await {
        Ok(()) => Ok(()),
        Err(WalletError::UnknownChain) => {
            api.add_chain(&ChainParams::base_mainnet()).await?;
            api.switch_chain(BASE_CHAIN_ID).await
        }
        Err(e) => Err(e),
    }
}

/// One-shot provider setup, run the first time the main screen activates:
/// installs the account/chain subscriptions and silently reconnects when the
/// wallet already authorized this site. Idempotent.
pub async fn ensure_provider_initialized(wallet: WalletContext, notify: NotifyContext) {
    if !wallet.mark_provider_initialized() {
        return;
    }
    if !provider::provider_available() {
        notify.error("MetaMask is not installed");
        return;
    }

    provider::subscribe_accounts_changed(move |accounts| match accounts.first() {
        None => {
            wallet.disconnect();
            notify.warning("Wallet disconnected");
        }
        Some(address) => {
            if wallet.is_connected_untracked() {
                wallet.set_connected(address.clone());
            }
        }
    });

    provider::subscribe_chain_changed(move |chain_id| {
        if chain_id != BASE_CHAIN_ID {
            notify.warning("Switch to the Base network");
        }
    });

    match provider::connected_accounts().await {
        Ok(accounts) => {
            if let Some(address) = accounts.into_iter().next() {
                log::info!("wallet already authorized: {}", truncate_address(&address));
                wallet.set_connected(address);
            }
        }
        Err(e) => log::warn!("eager account lookup failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Scripted chain API that records every call in order.
    #[derive(Default)]
    struct ScriptedChain {
        chain: String,
        switch_results: RefCell<Vec<Result<()>>>,
        calls: RefCell<Vec<String>>,
    }

    impl ChainApi for ScriptedChain {
        async fn chain_id(&self) -> Result<String> {
            self.calls.borrow_mut().push("chain_id".to_string());
            Ok(self.chain.clone())
        }

        async fn switch_chain(&self, chain_id: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("switch:{}", chain_id));
            if self.switch_results.borrow().is_empty() {
                Ok(())
            } else {
                self.switch_results.borrow_mut().remove(0)
            }
        }

        async fn add_chain(&self, params: &ChainParams) -> Result<()> {
            self.calls.borrow_mut().push(format!("add:{}", params.chain_id));
            Ok(())
        }
    }

    #[test]
    fn test_unknown_chain_registers_base_before_retrying_the_switch() {
        let api = ScriptedChain {
            chain: "0x1".to_string(),
            switch_results: RefCell::new(vec![Err(WalletError::UnknownChain), Ok(())]),
            calls: RefCell::default(),
        };

        futures::executor::block_on(ensure_chain(&api)).unwrap();
        assert_eq!(
            *api.calls.borrow(),
            vec!["chain_id", "switch:0x2105", "add:0x2105", "switch:0x2105"]
        );
    }

    #[test]
    fn test_matching_chain_switches_nothing() {
        let api = ScriptedChain {
            chain: "0x2105".to_string(),
            ..Default::default()
        };

        futures::executor::block_on(ensure_chain(&api)).unwrap();
        assert_eq!(*api.calls.borrow(), vec!["chain_id"]);
    }

    #[test]
    fn test_other_switch_errors_never_register_a_chain() {
        let api = ScriptedChain {
            chain: "0x1".to_string(),
            switch_results: RefCell::new(vec![Err(WalletError::UserRejected)]),
            calls: RefCell::default(),
        };

        let err = futures::executor::block_on(ensure_chain(&api)).unwrap_err();
        assert_eq!(err, WalletError::UserRejected);
        assert_eq!(*api.calls.borrow(), vec!["chain_id", "switch:0x2105"]);
    }
}
