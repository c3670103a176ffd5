//! Floppy purchase screen

use leptos::prelude::*;

use crate::services::purchase;
use crate::state::notify::use_notify_context;
use crate::state::screen::{use_screen_context, Screen};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::FLOPPY_PRICE_WEI;
use crate::utils::eth::format_wei_as_eth;

#[component]
pub fn FloppyScreen() -> impl IntoView {
    let screen = use_screen_context();
    let wallet = use_wallet_context();
    let notify = use_notify_context();

    let on_buy = move |_| {
        leptos::task::spawn_local(purchase::buy_floppy(wallet, notify));
    };
    let on_back = move |_| {
        screen.start(Screen::Main);
    };

    view! {
        <div
            id="floppy-screen"
            class="screen"
            style=move || screen.style_for(Screen::Floppy)
        >
            <img id="floppy-image" src="assets/floppy.png" alt="floppy"/>

            <button id="buy-floppy" class="pixel-button" on:click=on_buy>
                {format!("BUY FLOPPY ({} ETH)", format_wei_as_eth(FLOPPY_PRICE_WEI))}
            </button>

            <button id="back-to-main" class="pixel-button" on:click=on_back>
                "BACK"
            </button>
        </div>
    }
}
