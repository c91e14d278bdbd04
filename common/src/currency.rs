//! Currency and country codes supported by KundaPay.
//!
//! Both sets are closed: a transfer can only exist between the countries
//! listed here, and every country settles in exactly one currency. Keeping
//! these as enums means an unsupported combination is a construction-time
//! error rather than a silent lookup miss.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 code of a currency the platform can send or deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Central African CFA franc.
    Xaf,
    /// Euro.
    Eur,
    /// Chinese yuan.
    Cny,
    /// United States dollar.
    Usd,
    /// Canadian dollar.
    Cad,
}

impl CurrencyCode {
    /// The ISO 4217 code string.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Xaf => "XAF",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Cad => "CAD",
        }
    }

    /// Decimal places amounts are expressed in.
    ///
    /// XAF has no usable subunit (smallest circulating denomination is the
    /// 5-franc coin), so XAF amounts are whole francs and rounding works in
    /// multiples of 5. Every other supported currency uses cents.
    pub fn decimal_places(&self) -> u32 {
        match self {
            CurrencyCode::Xaf => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A country KundaPay operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountryCode {
    Gabon,
    France,
    Belgium,
    Germany,
    China,
    UnitedStates,
    Canada,
}

impl CountryCode {
    /// ISO 3166-1 alpha-2 code.
    pub fn alpha2(&self) -> &'static str {
        match self {
            CountryCode::Gabon => "GA",
            CountryCode::France => "FR",
            CountryCode::Belgium => "BE",
            CountryCode::Germany => "DE",
            CountryCode::China => "CN",
            CountryCode::UnitedStates => "US",
            CountryCode::Canada => "CA",
        }
    }

    /// Uppercase label used in direction tokens (`GABON_TO_FRANCE`).
    pub fn label(&self) -> &'static str {
        match self {
            CountryCode::Gabon => "GABON",
            CountryCode::France => "FRANCE",
            CountryCode::Belgium => "BELGIUM",
            CountryCode::Germany => "GERMANY",
            CountryCode::China => "CHINA",
            CountryCode::UnitedStates => "UNITED_STATES",
            CountryCode::Canada => "CANADA",
        }
    }

    /// The settlement currency of this country.
    pub fn currency(&self) -> CurrencyCode {
        match self {
            CountryCode::Gabon => CurrencyCode::Xaf,
            CountryCode::France | CountryCode::Belgium | CountryCode::Germany => CurrencyCode::Eur,
            CountryCode::China => CurrencyCode::Cny,
            CountryCode::UnitedStates => CurrencyCode::Usd,
            CountryCode::Canada => CurrencyCode::Cad,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alpha2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_currency_mapping() {
        assert_eq!(CountryCode::Gabon.currency(), CurrencyCode::Xaf);
        assert_eq!(CountryCode::France.currency(), CurrencyCode::Eur);
        assert_eq!(CountryCode::Belgium.currency(), CurrencyCode::Eur);
        assert_eq!(CountryCode::Germany.currency(), CurrencyCode::Eur);
        assert_eq!(CountryCode::China.currency(), CurrencyCode::Cny);
        assert_eq!(CountryCode::UnitedStates.currency(), CurrencyCode::Usd);
        assert_eq!(CountryCode::Canada.currency(), CurrencyCode::Cad);
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(CurrencyCode::Xaf.decimal_places(), 0);
        assert_eq!(CurrencyCode::Eur.decimal_places(), 2);
        assert_eq!(CurrencyCode::Usd.decimal_places(), 2);
    }

    #[test]
    fn test_display_codes() {
        assert_eq!(CurrencyCode::Xaf.to_string(), "XAF");
        assert_eq!(CountryCode::Gabon.to_string(), "GA");
        assert_eq!(CountryCode::UnitedStates.label(), "UNITED_STATES");
    }
}
