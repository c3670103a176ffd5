//! # Shared Chain Types and Display Helpers
//!
//! This library defines the wire-format types the site hands to the injected
//! wallet provider, plus the display helpers used by the UI. Everything here
//! is plain Rust with no wasm dependencies, so it is testable on the host.
//!
//! ## Structure
//!
//! - **[`chain`]**: EIP-3085 / transaction wire structs and the Base mainnet
//!   network parameters
//! - **[`utils`]**: wallet-address formatting for display
//!   - **[`utils::format_address`]**: first N + last M characters with ellipsis
//!   - **[`utils::truncate_address`]**: the site's default `0xAbCd...0042` form
//!
//! ## Wire Format
//!
//! The provider expects the exact JSON shapes of `wallet_addEthereumChain`
//! and `eth_sendTransaction`, so [`chain::ChainParams`] and
//! [`chain::TransactionRequest`] serialize with **camelCase** field names.

pub mod chain;
pub mod utils;

pub use chain::*;
pub use utils::*;
