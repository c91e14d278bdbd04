//! Transfer routes between supported countries.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::currency::{CountryCode, CurrencyCode};

/// Error returned when a country pair is not in the supported corridor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported transfer route: {origin} -> {destination}")]
pub struct UnsupportedRoute {
    pub origin: CountryCode,
    pub destination: CountryCode,
}

/// An origin/destination country pair.
///
/// Only corridors with Gabon at one end are supported: Gabon to or from each
/// of France, Belgium, Germany, China, the United States and Canada. Every
/// other pair is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    pub origin: CountryCode,
    pub destination: CountryCode,
}

impl Route {
    /// Create a route, validating it against the corridor table.
    pub fn new(origin: CountryCode, destination: CountryCode) -> Result<Self, UnsupportedRoute> {
        let route = Self {
            origin,
            destination,
        };
        if route.is_supported() {
            Ok(route)
        } else {
            Err(UnsupportedRoute {
                origin,
                destination,
            })
        }
    }

    /// Whether this country pair is in the corridor table.
    pub fn is_supported(&self) -> bool {
        let partner = match (self.origin, self.destination) {
            (CountryCode::Gabon, other) | (other, CountryCode::Gabon) => other,
            _ => return false,
        };
        !matches!(partner, CountryCode::Gabon)
    }

    /// The canonical `{ORIGIN}_TO_{DESTINATION}` token for this route.
    pub fn direction(&self) -> String {
        self.to_string()
    }

    /// Currency the sender pays in.
    pub fn sender_currency(&self) -> CurrencyCode {
        self.origin.currency()
    }

    /// Currency the beneficiary receives in.
    pub fn receiver_currency(&self) -> CurrencyCode {
        self.destination.currency()
    }

    /// Whether the transfer is sent from Gabon (weekly caps apply).
    pub fn originates_in_gabon(&self) -> bool {
        self.origin == CountryCode::Gabon
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_TO_{}", self.origin.label(), self.destination.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gabon_corridors_are_supported() {
        for partner in [
            CountryCode::France,
            CountryCode::Belgium,
            CountryCode::Germany,
            CountryCode::China,
            CountryCode::UnitedStates,
            CountryCode::Canada,
        ] {
            assert!(Route::new(CountryCode::Gabon, partner).is_ok());
            assert!(Route::new(partner, CountryCode::Gabon).is_ok());
        }
    }

    #[test]
    fn test_non_gabon_pairs_are_rejected() {
        let result = Route::new(CountryCode::France, CountryCode::Belgium);
        assert!(matches!(
            result,
            Err(UnsupportedRoute {
                origin: CountryCode::France,
                destination: CountryCode::Belgium,
            })
        ));
        assert!(Route::new(CountryCode::Gabon, CountryCode::Gabon).is_err());
    }

    #[test]
    fn test_direction_token() {
        let route = Route::new(CountryCode::Gabon, CountryCode::France).unwrap();
        assert_eq!(route.direction(), "GABON_TO_FRANCE");

        let route = Route::new(CountryCode::UnitedStates, CountryCode::Gabon).unwrap();
        assert_eq!(route.direction(), "UNITED_STATES_TO_GABON");
    }

    #[test]
    fn test_route_currencies() {
        let route = Route::new(CountryCode::France, CountryCode::Gabon).unwrap();
        assert_eq!(route.sender_currency(), CurrencyCode::Eur);
        assert_eq!(route.receiver_currency(), CurrencyCode::Xaf);
        assert!(!route.originates_in_gabon());

        let route = Route::new(CountryCode::Gabon, CountryCode::Canada).unwrap();
        assert!(route.originates_in_gabon());
    }
}
