//! Background music state
//!
//! The `<audio>` element lives in `index.html`. Browsers refuse autoplay
//! before a user gesture, so the element is loaded lazily on the first click
//! and every playback failure is logged rather than surfaced.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::utils::constants::MUSIC_VOLUME;

const AUDIO_ELEMENT_ID: &str = "background-music";

/// Global audio context
#[derive(Clone, Copy)]
pub struct AudioContext {
    pub muted: RwSignal<bool>,
    initialized: RwSignal<bool>,
}

impl AudioContext {
    pub fn new() -> Self {
        Self {
            muted: RwSignal::new(false),
            initialized: RwSignal::new(false),
        }
    }

    fn element() -> Option<HtmlAudioElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(AUDIO_ELEMENT_ID)?
            .dyn_into::<HtmlAudioElement>()
            .ok()
    }

    /// Lazy one-shot init on the first user interaction.
    pub fn ensure_initialized(&self) {
        if self.initialized.get_untracked() {
            return;
        }
        self.initialized.set(true);

        let Some(audio) = Self::element() else {
            log::warn!("background music element not found");
            return;
        };
        audio.set_volume(MUSIC_VOLUME);
        audio.load();
        if !self.muted.get_untracked() {
            Self::play(&audio);
        }
    }

    pub fn toggle_mute(&self) {
        let muted = !self.muted.get_untracked();
        self.muted.set(muted);

        let Some(audio) = Self::element() else {
            return;
        };
        if muted {
            let _ = audio.pause();
        } else if self.initialized.get_untracked() {
            Self::play(&audio);
        }
    }

    fn play(audio: &HtmlAudioElement) {
        match audio.play() {
            Ok(promise) => {
                leptos::task::spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        log::warn!("audio play was blocked");
                    }
                });
            }
            Err(e) => log::warn!("audio play failed: {:?}", e),
        }
    }
}

pub fn provide_audio_context() -> AudioContext {
    let context = AudioContext::new();
    provide_context(context);
    context
}

pub fn use_audio_context() -> AudioContext {
    expect_context::<AudioContext>()
}
