//! Exchange rate table and resolution.

use std::collections::HashMap;

use kundapay_common::CurrencyCode;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// Caller-supplied snapshot of exchange rates.
///
/// A pair and its inverse need not both be present: resolution falls back to
/// the reciprocal of the opposite entry. The table is treated as
/// authoritative for the duration of one calculation; there is no staleness
/// tracking here.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<(CurrencyCode, CurrencyCode), Decimal>,
}

impl ExchangeRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rate, consuming and returning the table (builder style).
    pub fn with_rate(mut self, from: CurrencyCode, to: CurrencyCode, rate: Decimal) -> Self {
        self.insert(from, to, rate);
        self
    }

    /// Add or replace a rate.
    pub fn insert(&mut self, from: CurrencyCode, to: CurrencyCode, rate: Decimal) {
        self.rates.insert((from, to), rate);
    }

    /// Resolve the rate from one currency to another.
    ///
    /// Same-currency pairs are always 1 without a lookup. Otherwise the
    /// direct entry wins; if it is absent the inverse entry's reciprocal is
    /// used. Non-positive stored rates are treated as absent.
    pub fn resolve(&self, from: CurrencyCode, to: CurrencyCode) -> CalcResult<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        if let Some(rate) = self.lookup(from, to) {
            return Ok(rate);
        }

        if let Some(inverse) = self.lookup(to, from) {
            debug!(%from, %to, "using reciprocal of inverse rate");
            return Ok(Decimal::ONE / inverse);
        }

        Err(CalcError::RateUnavailable { from, to })
    }

    fn lookup(&self, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
        self.rates
            .get(&(from, to))
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_direct_rate() {
        let table = ExchangeRateTable::new().with_rate(
            CurrencyCode::Eur,
            CurrencyCode::Xaf,
            dec!(655.96),
        );

        let rate = table.resolve(CurrencyCode::Eur, CurrencyCode::Xaf).unwrap();
        assert_eq!(rate, dec!(655.96));
    }

    #[test]
    fn test_inverse_fallback() {
        let table = ExchangeRateTable::new().with_rate(
            CurrencyCode::Eur,
            CurrencyCode::Xaf,
            dec!(655.96),
        );

        let rate = table.resolve(CurrencyCode::Xaf, CurrencyCode::Eur).unwrap();
        assert_eq!(rate, Decimal::ONE / dec!(655.96));
    }

    #[test]
    fn test_same_currency_is_one_without_lookup() {
        let table = ExchangeRateTable::new();
        let rate = table.resolve(CurrencyCode::Usd, CurrencyCode::Usd).unwrap();
        assert_eq!(rate, Decimal::ONE);
    }

    #[test]
    fn test_missing_both_directions_fails() {
        let table = ExchangeRateTable::new();
        let result = table.resolve(CurrencyCode::Eur, CurrencyCode::Cny);
        assert!(matches!(
            result,
            Err(CalcError::RateUnavailable {
                from: CurrencyCode::Eur,
                to: CurrencyCode::Cny,
            })
        ));
    }

    #[test]
    fn test_non_positive_rate_is_treated_as_absent() {
        let table =
            ExchangeRateTable::new().with_rate(CurrencyCode::Usd, CurrencyCode::Xaf, dec!(0));
        assert!(table.resolve(CurrencyCode::Usd, CurrencyCode::Xaf).is_err());
    }
}
