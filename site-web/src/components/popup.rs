//! Mint popup component

use leptos::prelude::*;

use crate::services::purchase;
use crate::state::notify::use_notify_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn MintPopup(visible: RwSignal<bool>) -> impl IntoView {
    let wallet = use_wallet_context();
    let notify = use_notify_context();

    let on_mint = move |_| purchase::mint(wallet, notify, visible);
    let on_close = move |_| visible.set(false);

    view! {
        <div id="mint-popup" class="mint-popup" class:active=move || visible.get()>
            <div class="popup-content">
                <button id="close-popup" class="close-popup" on:click=on_close>
                    "X"
                </button>
                <h2>"Mint"</h2>
                <p>"Mint your own basement artifact."</p>
                <button id="mint-button" class="pixel-button" on:click=on_mint>
                    "MINT"
                </button>
            </div>
        </div>
    }
}
