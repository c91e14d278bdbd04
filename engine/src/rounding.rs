//! Currency-specific rounding rules.
//!
//! XAF circulates in multiples of 5 francs, so XAF amounts are rounded to
//! 5-franc steps. The direction is asymmetric on purpose: sent amounts and
//! fees round up, received amounts round down, so rounding drift can never
//! under-collect a fee or over-pay a beneficiary. Decimal currencies round
//! to cents, half away from zero.

use kundapay_common::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

fn five() -> Decimal {
    Decimal::from(5)
}

fn round_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round up to the next multiple of 5.
fn ceil_to_five(value: Decimal) -> Decimal {
    (value / five()).ceil() * five()
}

/// Round down to the previous multiple of 5.
fn floor_to_five(value: Decimal) -> Decimal {
    (value / five()).floor() * five()
}

/// Round to the nearest multiple of 5.
pub fn round_to_nearest_five(value: Decimal) -> Decimal {
    (value / five()).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * five()
}

/// Round an amount the sender pays.
pub fn round_sent(value: Decimal, currency: CurrencyCode) -> Decimal {
    match currency {
        CurrencyCode::Xaf => ceil_to_five(value),
        _ => round_decimal(value),
    }
}

/// Round an amount the beneficiary receives.
pub fn round_received(value: Decimal, currency: CurrencyCode) -> Decimal {
    match currency {
        CurrencyCode::Xaf => floor_to_five(value),
        _ => round_decimal(value),
    }
}

/// Round a fee charged to the sender.
pub fn round_fee(value: Decimal, currency: CurrencyCode) -> Decimal {
    match currency {
        CurrencyCode::Xaf => ceil_to_five(value),
        _ => round_decimal(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_xaf_sent_rounds_up() {
        assert_eq!(round_sent(dec!(101), CurrencyCode::Xaf), dec!(105));
        assert_eq!(round_sent(dec!(100), CurrencyCode::Xaf), dec!(100));
        assert_eq!(round_sent(dec!(100.01), CurrencyCode::Xaf), dec!(105));
    }

    #[test]
    fn test_xaf_received_rounds_down() {
        assert_eq!(round_received(dec!(104.99), CurrencyCode::Xaf), dec!(100));
        assert_eq!(round_received(dec!(105), CurrencyCode::Xaf), dec!(105));
        assert_eq!(round_received(dec!(64940.04), CurrencyCode::Xaf), dec!(64940));
    }

    #[test]
    fn test_nearest_five() {
        assert_eq!(round_to_nearest_five(dec!(1948.2012)), dec!(1950));
        assert_eq!(round_to_nearest_five(dec!(5000.1)), dec!(5000));
        assert_eq!(round_to_nearest_five(dec!(2.5)), dec!(5));
        assert_eq!(round_to_nearest_five(dec!(0.03)), dec!(0));
    }

    #[test]
    fn test_decimal_currencies_round_to_cents() {
        assert_eq!(round_sent(dec!(100.005), CurrencyCode::Eur), dec!(100.01));
        assert_eq!(round_received(dec!(99.994), CurrencyCode::Eur), dec!(99.99));
        assert_eq!(round_fee(dec!(2.97274), CurrencyCode::Eur), dec!(2.97));
    }

    proptest! {
        #[test]
        fn prop_xaf_sent_is_multiple_of_five_and_not_below(cents in 1u64..100_000_000) {
            let value = Decimal::new(cents as i64, 2);
            let rounded = round_sent(value, CurrencyCode::Xaf);
            prop_assert!(rounded >= value);
            prop_assert_eq!(rounded % Decimal::from(5), Decimal::ZERO);
            prop_assert!(rounded - value < Decimal::from(5));
        }

        #[test]
        fn prop_xaf_received_is_multiple_of_five_and_not_above(cents in 1u64..100_000_000) {
            let value = Decimal::new(cents as i64, 2);
            let rounded = round_received(value, CurrencyCode::Xaf);
            prop_assert!(rounded <= value);
            prop_assert_eq!(rounded % Decimal::from(5), Decimal::ZERO);
            prop_assert!(value - rounded < Decimal::from(5));
        }
    }
}
