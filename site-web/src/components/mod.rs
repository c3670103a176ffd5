//! UI Components

pub mod mute_button;
pub mod notifications;
pub mod popup;

pub use mute_button::MuteButton;
pub use notifications::Notifications;
pub use popup::MintPopup;
