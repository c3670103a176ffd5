//! Purchase and mint actions
//!
//! All three actions are gated on wallet connection; the floppy purchase is
//! a fixed-value transfer to the treasury address, confirmed by polling for
//! the transaction receipt.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use shared::chain::{TransactionRequest, BASE_CHAIN_ID};

use crate::error::{Result, WalletError};
use crate::services::provider;
use crate::services::wallet::report_wallet_error;
use crate::state::notify::NotifyContext;
use crate::state::wallet::WalletContext;
use crate::utils::constants::{
    FLOPPY_PRICE_WEI, RECEIPT_POLL_ATTEMPTS, RECEIPT_POLL_INTERVAL_MS, TREASURY_ADDRESS,
};

/// Connection gate shared by every purchase action. On failure the caller
/// reports it exactly once and goes no further.
fn purchase_gate(wallet: WalletContext) -> Result<String> {
    wallet.address_untracked().ok_or(WalletError::NotConnected)
}

/// Show the mint popup; refused with a single warning while disconnected.
pub fn open_purchase_popup(
    wallet: WalletContext,
    notify: NotifyContext,
    popup: RwSignal<bool>,
) -> bool {
    if let Err(e) = purchase_gate(wallet) {
        report_wallet_error(notify, &e);
        return false;
    }
    popup.set(true);
    true
}

/// Mint is not live yet; informs the user and closes the popup.
pub fn mint(wallet: WalletContext, notify: NotifyContext, popup: RwSignal<bool>) {
    if let Err(e) = purchase_gate(wallet) {
        report_wallet_error(notify, &e);
        return;
    }
    notify.info("Mint functionality in development...");
    popup.set(false);
}

/// Send the fixed-price floppy purchase and report progress as it happens:
/// the hash immediately on submission, success once the receipt lands.
pub async fn buy_floppy(wallet: WalletContext, notify: NotifyContext) {
    let address = match purchase_gate(wallet) {
        Ok(address) => address,
        Err(e) => {
            report_wallet_error(notify, &e);
            return;
        }
    };

    // Never submit on the wrong chain.
    match provider::chain_id().await {
        Ok(id) if id == BASE_CHAIN_ID => {}
        Ok(_) => {
            notify.warning("Switch to the Base network before buying");
            return;
        }
        Err(e) => {
            report_wallet_error(notify, &e);
            return;
        }
    }

    let tx = TransactionRequest::value_transfer(&address, TREASURY_ADDRESS, FLOPPY_PRICE_WEI);
    match provider::send_transaction(&tx).await {
        Ok(hash) => {
            notify.success(format!("Transaction sent: {}", hash));
            match await_confirmation(&hash).await {
                Ok(()) => notify.success("Floppy purchased successfully!"),
                Err(e) => {
                    log::error!("purchase confirmation failed: {}", e);
                    notify.error("Error in purchase");
                }
            }
        }
        Err(e) => {
            log::error!("transaction submission failed: {}", e);
            report_wallet_error(notify, &e);
        }
    }
}

/// Poll for the receipt until the transaction is mined.
async fn await_confirmation(hash: &str) -> Result<()> {
    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
        if let Some(receipt) = provider::transaction_receipt(hash).await? {
            if provider::receipt_status_ok(&receipt) {
                return Ok(());
            }
            return Err(WalletError::Transaction("transaction reverted".to_string()));
        }
    }
    Err(WalletError::Timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notify::Severity;

    fn severities(notify: &NotifyContext) -> Vec<Severity> {
        notify
            .queue
            .get_untracked()
            .items()
            .iter()
            .map(|n| n.severity)
            .collect()
    }

    #[test]
    fn test_popup_refused_with_one_warning_while_disconnected() {
        let wallet = WalletContext::new();
        let notify = NotifyContext::new();
        let popup = RwSignal::new(false);

        assert!(!open_purchase_popup(wallet, notify, popup));
        assert!(!popup.get_untracked());
        assert_eq!(severities(&notify), vec![Severity::Warning]);
    }

    #[test]
    fn test_popup_opens_without_warnings_when_connected() {
        let wallet = WalletContext::new();
        wallet.set_connected("0xAbCdEf1234567890000000000000000000000042".to_string());
        let notify = NotifyContext::new();
        let popup = RwSignal::new(false);

        assert!(open_purchase_popup(wallet, notify, popup));
        assert!(popup.get_untracked());
        assert!(severities(&notify).is_empty());
    }

    #[test]
    fn test_buy_refused_with_one_warning_while_disconnected() {
        let wallet = WalletContext::new();
        let notify = NotifyContext::new();

        // Never reaches the provider: past the gate every path would go
        // through wallet extension bindings that do not exist off-browser.
        futures::executor::block_on(buy_floppy(wallet, notify));
        assert_eq!(severities(&notify), vec![Severity::Warning]);
    }

    #[test]
    fn test_mint_refused_while_disconnected() {
        let wallet = WalletContext::new();
        let notify = NotifyContext::new();
        let popup = RwSignal::new(true);

        mint(wallet, notify, popup);
        assert!(popup.get_untracked());
        assert_eq!(severities(&notify), vec![Severity::Warning]);
    }
}
