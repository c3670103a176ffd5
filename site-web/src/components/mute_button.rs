//! Mute toggle component

use leptos::prelude::*;

use crate::state::audio::use_audio_context;

#[component]
pub fn MuteButton() -> impl IntoView {
    let audio = use_audio_context();

    view! {
        <button
            id="mute-button"
            class="mute-button"
            on:click=move |_| audio.toggle_mute()
        >
            {move || if audio.muted.get() { "\u{1F507}" } else { "\u{1F50A}" }}
        </button>
    }
}
