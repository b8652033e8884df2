use super::Decimal;

/// Fixed multiplier that expresses one unit of `currency` in USD.
///
/// This is a static table, not a live rate source. Codes the table does
/// not know (USD itself included) pass through at 1.0.
pub(crate) fn usd_multiplier(currency: &str) -> Decimal {
    match currency {
        "CAD" => Decimal::new(7, 1),
        "GBP" => Decimal::new(124, 2),
        _ => Decimal::ONE,
    }
}

/// Convert an amount denominated in `currency` into USD.
pub(crate) fn to_usd(amount: Decimal, currency: &str) -> Decimal {
    amount * usd_multiplier(currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cad_multiplier() {
        assert_eq!(usd_multiplier("CAD"), dec!(0.7));
    }

    #[test]
    fn test_gbp_multiplier() {
        assert_eq!(usd_multiplier("GBP"), dec!(1.24));
    }

    #[test]
    fn test_usd_passes_through() {
        assert_eq!(usd_multiplier("USD"), dec!(1));
    }

    #[test]
    fn test_unrecognized_code_passes_through() {
        assert_eq!(usd_multiplier("XYZ"), dec!(1));
        assert_eq!(to_usd(dec!(42.42), "XYZ"), dec!(42.42));
    }

    #[test]
    fn test_conversion_is_exact() {
        assert_eq!(to_usd(dec!(15.23), "CAD"), dec!(10.661));
        assert_eq!(to_usd(dec!(20.37), "GBP"), dec!(25.2588));
    }

    #[test]
    fn test_refund_converts_with_sign() {
        assert_eq!(to_usd(dec!(-10), "CAD"), dec!(-7));
    }
}
