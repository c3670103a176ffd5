//! # Shared Utility Functions
//!
//! Address formatting for display on the connect-wallet button.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0xAbCdEf1234567890000000000000000000000042";
//! assert_eq!(truncate_address(address), "0xAbCd...0042");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters with an ellipsis between them.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xAbCdEf1234567890000000000000000000000042";
/// assert_eq!(format_address(addr, 6, 4), "0xAbCd...0042");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    // Nothing to elide when the whole address already fits.
    if address.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    // Addresses are ASCII hex, so byte slicing cannot split a character.
    let prefix = &address[..prefix_len];
    let suffix = &address[address.len() - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the site's default 6-character prefix
/// (which covers the `0x` tag) and 4-character suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xAbCdEf1234567890000000000000000000000042";
        assert_eq!(format_address(addr, 6, 4), "0xAbCd...0042");
        assert_eq!(format_address(addr, 4, 4), "0xAb...0042");
        assert_eq!(format_address(addr, 2, 2), "0x...42");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("0x42", 6, 4), "0x42");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0xAbCdEf1234567890000000000000000000000042";
        assert_eq!(truncate_address(addr), "0xAbCd...0042");
    }
}
