//! # ETH amount formatting
//!
//! Renders wei amounts as human-readable ETH strings for the fixed floppy
//! price. For address formatting, use [`shared::utils::truncate_address`].

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Format a wei amount as an ETH decimal string with trailing zeros trimmed.
///
/// # Examples
///
/// ```rust
/// use site_web::utils::eth::format_wei_as_eth;
///
/// assert_eq!(format_wei_as_eth(10_000_000_000_000_000), "0.01");
/// assert_eq!(format_wei_as_eth(1_000_000_000_000_000_000), "1");
/// ```
pub fn format_wei_as_eth(wei: u128) -> String {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;

    if frac == 0 {
        return whole.to_string();
    }

    let frac_str = format!("{:018}", frac);
    let trimmed = frac_str.trim_end_matches('0');
    format!("{}.{}", whole, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::FLOPPY_PRICE_WEI;

    #[test]
    fn test_format_wei_as_eth() {
        assert_eq!(format_wei_as_eth(0), "0");
        assert_eq!(format_wei_as_eth(FLOPPY_PRICE_WEI), "0.01");
        assert_eq!(format_wei_as_eth(WEI_PER_ETH), "1");
        assert_eq!(format_wei_as_eth(WEI_PER_ETH + WEI_PER_ETH / 2), "1.5");
        assert_eq!(format_wei_as_eth(1), "0.000000000000000001");
    }
}
