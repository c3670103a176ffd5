//! Application constants

// Purchase parameters (fixed)
pub const TREASURY_ADDRESS: &str = "0x7E99075Ce287F1cF8cBCAaa6A1C7894e404fD7Ea";
pub const FLOPPY_PRICE_WEI: u128 = 10_000_000_000_000_000; // 0.01 ETH

// Screen timing
pub const INTRO_ART_FADE_IN_MS: u32 = 2_000;
pub const INTRO_AUTO_ADVANCE_MS: u32 = 10_000;
pub const INTRO_FADE_OUT_MS: u32 = 8_000;
pub const SCREEN_FADE_IN_MS: u32 = 2_000;
pub const SCREEN_SWAP_MS: u32 = 2_000;
// Opacity is flipped one tick after the display swap so the CSS transition
// has a rendered frame at opacity 0 to start from.
pub const FADE_SETTLE_DELAY_MS: u32 = 100;

// Notifications
pub const NOTIFICATION_DISPLAY_MS: u32 = 5_000;
pub const NOTIFICATION_FADE_MS: u32 = 1_000;

// Provider call deadlines: prompts wait for a human in the wallet popup,
// plain reads should come back quickly.
pub const PROMPT_TIMEOUT_MS: u32 = 120_000;
pub const QUERY_TIMEOUT_MS: u32 = 15_000;

// Transaction confirmation polling (~3 minutes total)
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 4_000;
pub const RECEIPT_POLL_ATTEMPTS: u32 = 45;

// Audio
pub const MUSIC_VOLUME: f64 = 0.3;
