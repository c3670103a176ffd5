//! Intro screen
//!
//! Static art fades in, then either a click or the auto-advance timer moves
//! on to the main screen. The click also unlocks the background music, which
//! browsers refuse to start without a user gesture.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::audio::use_audio_context;
use crate::state::screen::{use_screen_context, Screen};
use crate::utils::constants::{FADE_SETTLE_DELAY_MS, INTRO_ART_FADE_IN_MS};

#[component]
pub fn IntroScreen() -> impl IntoView {
    let screen = use_screen_context();
    let audio = use_audio_context();
    let (art_visible, set_art_visible) = signal(false);

    // Fade the art in one frame after mount, then arm the auto-advance.
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(FADE_SETTLE_DELAY_MS).await;
        set_art_visible.set(true);
    });
    screen.arm_intro_auto_advance();

    let on_click = move |_| {
        audio.ensure_initialized();
        screen.start(Screen::Main);
    };

    view! {
        <div
            id="intro-screen"
            class="screen"
            style=move || screen.style_for(Screen::Intro)
            on:click=on_click
        >
            <img
                id="intro-image"
                src="assets/intro.png"
                alt="basement"
                style=move || {
                    format!(
                        "opacity: {}; transition: opacity {}ms ease-in-out;",
                        if art_visible.get() { "1" } else { "0" },
                        INTRO_ART_FADE_IN_MS,
                    )
                }
            />
        </div>
    }
}
