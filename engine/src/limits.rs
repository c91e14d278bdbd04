//! Transfer limit validation.

use kundapay_common::{CurrencyCode, Route};
use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};

/// Rolling 7-day cap on amounts sent from Gabon, in XAF.
pub fn gabon_weekly_cap_xaf() -> Decimal {
    Decimal::from(150_000)
}

/// Validate a sent amount against the route's weekly cap.
///
/// `rolling_weekly_total` is the user's sent total over the trailing 7 days,
/// computed externally; this is a pure comparison. Routes that do not
/// originate in Gabon are currently uncapped.
pub fn validate(
    amount_sent: Decimal,
    route: &Route,
    rolling_weekly_total: Decimal,
) -> CalcResult<()> {
    if !route.originates_in_gabon() {
        return Ok(());
    }

    let cap = gabon_weekly_cap_xaf();
    if rolling_weekly_total + amount_sent > cap {
        return Err(CalcError::LimitExceeded {
            cap,
            currency: CurrencyCode::Xaf,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundapay_common::CountryCode;
    use rust_decimal_macros::dec;

    fn gabon_to_france() -> Route {
        Route::new(CountryCode::Gabon, CountryCode::France).unwrap()
    }

    #[test]
    fn test_cap_is_inclusive() {
        assert!(validate(dec!(150000), &gabon_to_france(), Decimal::ZERO).is_ok());

        let result = validate(dec!(150001), &gabon_to_france(), Decimal::ZERO);
        assert!(matches!(
            result,
            Err(CalcError::LimitExceeded {
                currency: CurrencyCode::Xaf,
                ..
            })
        ));
    }

    #[test]
    fn test_rolling_total_counts_against_cap() {
        assert!(validate(dec!(50000), &gabon_to_france(), dec!(100000)).is_ok());
        assert!(validate(dec!(50005), &gabon_to_france(), dec!(100000)).is_err());
    }

    #[test]
    fn test_inbound_routes_are_uncapped() {
        let route = Route::new(CountryCode::France, CountryCode::Gabon).unwrap();
        assert!(validate(dec!(10_000_000), &route, dec!(10_000_000)).is_ok());
    }
}
