//! KundaPay fee schedule.

use std::collections::HashMap;

use kundapay_common::{PaymentMethod, ReceivingMethod, Route};
use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};

/// Fee percentages per (route, payment method, receiving method).
///
/// Lookup is exact match only. A missing entry means the combination is not
/// offered and the calculation fails; there is no wildcard or default rate.
#[derive(Debug, Clone, Default)]
pub struct FeeSchedule {
    entries: HashMap<(Route, PaymentMethod, ReceivingMethod), Decimal>,
}

impl FeeSchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, consuming and returning the schedule (builder style).
    pub fn with_fee(
        mut self,
        route: Route,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
        percentage: Decimal,
    ) -> Self {
        self.insert(route, payment_method, receiving_method, percentage);
        self
    }

    /// Add or replace an entry.
    pub fn insert(
        &mut self,
        route: Route,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
        percentage: Decimal,
    ) {
        self.entries
            .insert((route, payment_method, receiving_method), percentage);
    }

    /// Look up the KundaPay fee percentage for a combination.
    ///
    /// The percentage is a fraction in `[0, 1)`, charged on the sent amount
    /// before conversion. Entries outside that range are treated as absent.
    pub fn fee_percentage(
        &self,
        route: &Route,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
    ) -> CalcResult<Decimal> {
        self.entries
            .get(&(*route, payment_method, receiving_method))
            .copied()
            .filter(|pct| *pct >= Decimal::ZERO && *pct < Decimal::ONE)
            .ok_or_else(|| CalcError::FeeScheduleUnavailable {
                direction: route.direction(),
                payment_method,
                receiving_method,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundapay_common::CountryCode;
    use rust_decimal_macros::dec;

    fn france_to_gabon() -> Route {
        Route::new(CountryCode::France, CountryCode::Gabon).unwrap()
    }

    #[test]
    fn test_exact_match_lookup() {
        let schedule = FeeSchedule::new().with_fee(
            france_to_gabon(),
            PaymentMethod::Card,
            ReceivingMethod::AirtelMoney,
            dec!(0.01),
        );

        let pct = schedule
            .fee_percentage(
                &france_to_gabon(),
                PaymentMethod::Card,
                ReceivingMethod::AirtelMoney,
            )
            .unwrap();
        assert_eq!(pct, dec!(0.01));
    }

    #[test]
    fn test_no_wildcard_fallback() {
        let schedule = FeeSchedule::new().with_fee(
            france_to_gabon(),
            PaymentMethod::Card,
            ReceivingMethod::AirtelMoney,
            dec!(0.01),
        );

        // Same route, different receiving method: absence is an error.
        let result = schedule.fee_percentage(
            &france_to_gabon(),
            PaymentMethod::Card,
            ReceivingMethod::MoovMoney,
        );
        assert!(matches!(
            result,
            Err(CalcError::FeeScheduleUnavailable {
                receiving_method: ReceivingMethod::MoovMoney,
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_percentage_is_absent() {
        let schedule = FeeSchedule::new().with_fee(
            france_to_gabon(),
            PaymentMethod::Card,
            ReceivingMethod::Cash,
            dec!(1.0),
        );

        assert!(schedule
            .fee_percentage(
                &france_to_gabon(),
                PaymentMethod::Card,
                ReceivingMethod::Cash,
            )
            .is_err());
    }
}
