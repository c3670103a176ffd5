//! Basement promo site - Leptos root component
//!
//! All three screens stay mounted; the screen context toggles their display
//! and opacity, so the fades match what the user saw in the original page.

use leptos::prelude::*;

use crate::components::{MuteButton, Notifications};
use crate::pages::{BasementScreen, FloppyScreen, IntroScreen};
use crate::state::audio::provide_audio_context;
use crate::state::notify::provide_notify_context;
use crate::state::screen::provide_screen_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_notify_context();
    provide_wallet_context();
    provide_screen_context();
    provide_audio_context();

    view! {
        <div class="app-container">
            <MuteButton/>
            <IntroScreen/>
            <BasementScreen/>
            <FloppyScreen/>
            <Notifications/>
        </div>
    }
}
