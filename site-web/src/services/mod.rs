//! Provider interop and user-facing flows

pub mod provider;
pub mod purchase;
pub mod wallet;
