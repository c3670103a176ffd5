//! Screen components, one per page state

pub mod basement;
pub mod floppy;
pub mod intro;

pub use basement::BasementScreen;
pub use floppy::FloppyScreen;
pub use intro::IntroScreen;
