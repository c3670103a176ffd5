//! EIP-1193 Provider Integration via wasm-bindgen
//!
//! JavaScript interop for the browser-injected wallet provider
//! (`window.ethereum`). Every request is raced against a deadline so a hung
//! provider call can never hang a UI action.

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use shared::chain::{ChainParams, TransactionRequest};

use crate::error::{Result, WalletError};
use crate::utils::constants::{PROMPT_TIMEOUT_MS, QUERY_TIMEOUT_MS};

#[wasm_bindgen(inline_js = "
export function hasProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function providerRequest(method, params) {
    if (!window.ethereum) {
        throw new Error('No wallet provider injected');
    }
    const payload = (params === undefined || params === null)
        ? { method }
        : { method, params };
    return await window.ethereum.request(payload);
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', (accounts) => callback(accounts));
    }
}

export function onChainChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('chainChanged', (chainId) => callback(chainId));
    }
}
")]
extern "C" {
    /// Whether a wallet provider is injected into the page
    fn hasProvider() -> bool;

    /// Send a JSON-RPC request through the provider
    #[wasm_bindgen(catch)]
    async fn providerRequest(
        method: &str,
        params: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    /// Subscribe to account changes
    fn onAccountsChanged(callback: &js_sys::Function);

    /// Subscribe to chain changes
    fn onChainChanged(callback: &js_sys::Function);
}

pub fn provider_available() -> bool {
    hasProvider()
}

/// Pull `code` and `message` out of a provider error object.
fn decode_js_error(err: &JsValue) -> (Option<i64>, String) {
    let code = js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|f| f as i64);
    let message = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    (code, message)
}

fn to_wallet_error(err: JsValue) -> WalletError {
    let (code, message) = decode_js_error(&err);
    WalletError::from_provider(code, message)
}

fn to_js_params<T: Serialize>(value: &T) -> Result<JsValue> {
    let js = serde_wasm_bindgen::to_value(value)
        .map_err(|e| WalletError::Provider(e.to_string()))?;
    Ok(js_sys::Array::of1(&js).into())
}

/// Send one provider request with a deadline.
async fn request(method: &str, params: JsValue, deadline_ms: u32) -> Result<JsValue> {
    if !hasProvider() {
        return Err(WalletError::ProviderUnavailable);
    }

    let call = providerRequest(method, params);
    let deadline = TimeoutFuture::new(deadline_ms);
    pin_mut!(call);
    pin_mut!(deadline);

    match select(call, deadline).await {
        Either::Left((result, _)) => result.map_err(to_wallet_error),
        Either::Right(_) => {
            log::warn!("{} timed out after {}ms", method, deadline_ms);
            Err(WalletError::Timeout)
        }
    }
}

/// Prompt the user for account access (`eth_requestAccounts`).
pub async fn request_accounts() -> Result<Vec<String>> {
    let value = request("eth_requestAccounts", JsValue::UNDEFINED, PROMPT_TIMEOUT_MS).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Provider(e.to_string()))
}

/// Silent query for accounts already authorized for this site.
pub async fn connected_accounts() -> Result<Vec<String>> {
    let value = request("eth_accounts", JsValue::UNDEFINED, QUERY_TIMEOUT_MS).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::Provider(e.to_string()))
}

/// Current chain id as a hex string (`eth_chainId`).
pub async fn chain_id() -> Result<String> {
    let value = request("eth_chainId", JsValue::UNDEFINED, QUERY_TIMEOUT_MS).await?;
    value
        .as_string()
        .ok_or_else(|| WalletError::Provider("chain id is not a string".to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams {
    chain_id: String,
}

/// Ask the wallet to select a chain (`wallet_switchEthereumChain`).
pub async fn switch_chain(chain_id: &str) -> Result<()> {
    let params = to_js_params(&SwitchChainParams {
        chain_id: chain_id.to_string(),
    })?;
    request("wallet_switchEthereumChain", params, PROMPT_TIMEOUT_MS)
        .await
        .map(|_| ())
}

/// Register a chain in the wallet (`wallet_addEthereumChain`, EIP-3085).
pub async fn add_chain(chain: &ChainParams) -> Result<()> {
    let params = to_js_params(chain)?;
    request("wallet_addEthereumChain", params, PROMPT_TIMEOUT_MS)
        .await
        .map(|_| ())
}

/// Submit a transaction; resolves to the transaction hash.
pub async fn send_transaction(tx: &TransactionRequest) -> Result<String> {
    let params = to_js_params(tx)?;
    let value = request("eth_sendTransaction", params, PROMPT_TIMEOUT_MS).await?;
    value
        .as_string()
        .ok_or_else(|| WalletError::Provider("transaction hash is not a string".to_string()))
}

/// Fetch the receipt for a hash; `None` while the transaction is pending.
pub async fn transaction_receipt(hash: &str) -> Result<Option<JsValue>> {
    let params: JsValue = js_sys::Array::of1(&JsValue::from_str(hash)).into();
    let value = request("eth_getTransactionReceipt", params, QUERY_TIMEOUT_MS).await?;
    if value.is_null() || value.is_undefined() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Whether a mined receipt reports success. A missing status field counts as
/// success (pre-Byzantium receipts have none).
pub fn receipt_status_ok(receipt: &JsValue) -> bool {
    js_sys::Reflect::get(receipt, &JsValue::from_str("status"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|s| s == "0x1")
        .unwrap_or(true)
}

/// Install an `accountsChanged` handler. The subscription lives for the page
/// lifetime, so the closure is leaked intentionally.
pub fn subscribe_accounts_changed(handler: impl Fn(Vec<String>) + 'static) {
    let closure = Closure::<dyn Fn(JsValue)>::new(move |accounts: JsValue| {
        let accounts: Vec<String> =
            serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
        handler(accounts);
    });
    onAccountsChanged(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Install a `chainChanged` handler; same lifetime rules as above.
pub fn subscribe_chain_changed(handler: impl Fn(String) + 'static) {
    let closure = Closure::<dyn Fn(JsValue)>::new(move |chain: JsValue| {
        if let Some(chain_id) = chain.as_string() {
            handler(chain_id);
        }
    });
    onChainChanged(closure.as_ref().unchecked_ref());
    closure.forget();
}
