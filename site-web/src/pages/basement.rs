//! Main "basement" screen
//!
//! Hosts the connect-wallet button, the click area that opens the mint
//! popup, and the way down to the floppy screen. The first time this screen
//! becomes active the provider setup runs exactly once.

use leptos::prelude::*;

use crate::components::MintPopup;
use crate::services::{purchase, wallet as wallet_service};
use crate::state::notify::use_notify_context;
use crate::state::screen::{use_screen_context, Screen};
use crate::state::wallet::use_wallet_context;

#[component]
pub fn BasementScreen() -> impl IntoView {
    let screen = use_screen_context();
    let wallet = use_wallet_context();
    let notify = use_notify_context();
    let popup = RwSignal::new(false);

    // One-shot provider setup on first activation; the guard inside makes
    // re-runs of this effect harmless.
    Effect::new(move || {
        if screen.is_current(Screen::Main) {
            leptos::task::spawn_local(wallet_service::ensure_provider_initialized(
                wallet, notify,
            ));
        }
    });

    let on_connect = move |_| {
        leptos::task::spawn_local(wallet_service::connect(wallet, notify));
    };
    let on_click_area = move |_| {
        purchase::open_purchase_popup(wallet, notify, popup);
    };
    let on_floppy = move |_| {
        screen.start(Screen::Floppy);
    };

    view! {
        <div
            id="main-screen"
            class="screen"
            style=move || screen.style_for(Screen::Main)
        >
            <button
                id="connect-wallet"
                class="pixel-button connect-wallet"
                class:connected=move || wallet.is_connected()
                on:click=on_connect
            >
                {move || wallet.wallet.get().button_label()}
            </button>

            <div id="click-area" class="click-area" on:click=on_click_area></div>

            <button id="go-to-floppy" class="pixel-button" on:click=on_floppy>
                "FLOPPY"
            </button>

            <MintPopup visible=popup/>
        </div>
    }
}
