//! Reactive application state (Leptos contexts)

pub mod audio;
pub mod notify;
pub mod screen;
pub mod wallet;
