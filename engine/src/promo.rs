//! Promo code records and evaluation.
//!
//! The engine only reads promo codes. Usage counters are incremented by the
//! transfer-creation workflow once a transfer actually exists, never here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kundapay_common::Route;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CalcError, CalcResult};

/// Discount a promo code grants on the KundaPay fee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discount {
    /// Percentage off the fee rate, expressed in percent (50 = half off).
    Percentage(Decimal),
    /// Fixed amount off the fee, in the sender's currency.
    Fixed(Decimal),
}

impl Discount {
    /// Apply the discount to a resolved fee percentage.
    ///
    /// A fixed discount is converted into a percentage of the known amount,
    /// so its effect depends on the amount and must be recomputed whenever
    /// the amount changes.
    pub fn effective_percentage(&self, base: Decimal, known_amount: Decimal) -> Decimal {
        match self {
            Discount::Percentage(d) => base * (Decimal::ONE - *d / Decimal::from(100)),
            Discount::Fixed(d) => (base - *d / known_amount).max(Decimal::ZERO),
        }
    }
}

/// A promotional discount code, as administered externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCode {
    /// The code string users enter.
    pub code: String,
    /// Route the code is restricted to.
    pub route: Route,
    /// Discount the code grants.
    pub discount: Discount,
    /// Start of the validity window (inclusive).
    pub starts_at: DateTime<Utc>,
    /// End of the validity window (exclusive).
    pub ends_at: DateTime<Utc>,
    /// Maximum number of uses; `None` means unlimited.
    pub max_uses: Option<u32>,
    /// Uses recorded so far.
    pub current_uses: u32,
    /// Whether the code is currently enabled.
    pub active: bool,
}

impl PromoCode {
    /// Check the code against a route and instant, returning why it cannot
    /// be applied, if anything.
    pub fn rejection(&self, route: &Route, now: DateTime<Utc>) -> Option<PromoRejection> {
        if !self.active {
            return Some(PromoRejection::Inactive);
        }
        if self.route != *route {
            return Some(PromoRejection::WrongRoute);
        }
        if now < self.starts_at {
            return Some(PromoRejection::NotYetStarted);
        }
        if now >= self.ends_at {
            return Some(PromoRejection::Expired);
        }
        if let Some(max) = self.max_uses {
            if self.current_uses >= max {
                return Some(PromoRejection::Exhausted);
            }
        }
        None
    }
}

/// Why a promo code cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoRejection {
    /// No code with that string exists.
    Unknown,
    /// The code has been deactivated.
    Inactive,
    /// The code is restricted to a different route.
    WrongRoute,
    /// The validity window has not opened yet.
    NotYetStarted,
    /// The validity window has closed.
    Expired,
    /// All allowed uses have been consumed.
    Exhausted,
}

impl fmt::Display for PromoRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            PromoRejection::Unknown => "unknown promo code",
            PromoRejection::Inactive => "promo code is no longer active",
            PromoRejection::WrongRoute => "promo code is not valid for this route",
            PromoRejection::NotYetStarted => "promo code is not valid yet",
            PromoRejection::Expired => "promo code has expired",
            PromoRejection::Exhausted => "promo code has reached its usage limit",
        };
        write!(f, "{reason}")
    }
}

/// Caller-supplied snapshot of promo codes, keyed by code string.
#[derive(Debug, Clone, Default)]
pub struct PromoCodeTable {
    codes: HashMap<String, PromoCode>,
}

impl PromoCodeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a code, consuming and returning the table (builder style).
    pub fn with_code(mut self, promo: PromoCode) -> Self {
        self.insert(promo);
        self
    }

    /// Add or replace a code.
    pub fn insert(&mut self, promo: PromoCode) {
        self.codes.insert(promo.code.clone(), promo);
    }

    /// Evaluate a code for a route at an instant.
    ///
    /// A supplied code that cannot be applied fails the whole calculation;
    /// it is never silently ignored.
    pub fn evaluate(
        &self,
        code: &str,
        route: &Route,
        now: DateTime<Utc>,
    ) -> CalcResult<&PromoCode> {
        let promo = self.codes.get(code).ok_or_else(|| CalcError::PromoCodeInvalid {
            code: code.to_string(),
            reason: PromoRejection::Unknown,
        })?;

        match promo.rejection(route, now) {
            Some(reason) => Err(CalcError::PromoCodeInvalid {
                code: code.to_string(),
                reason,
            }),
            None => Ok(promo),
        }
    }
}
