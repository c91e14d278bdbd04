//! Calculation engine error types.
//!
//! Every variant is a rejection of the whole calculation; the engine never
//! substitutes defaults or returns partial results.

use kundapay_common::{CurrencyCode, PaymentMethod, ReceivingMethod, UnsupportedRoute};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::promo::PromoRejection;

/// Errors that can occur while calculating a transfer.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Country pair not in the supported corridor table.
    #[error(transparent)]
    InvalidRoute(#[from] UnsupportedRoute),

    /// Known amount must be strictly positive.
    #[error("invalid amount: {0} (must be strictly positive)")]
    InvalidAmount(Decimal),

    /// No direct or inverse exchange rate for the currency pair.
    #[error("no exchange rate available for {from}/{to}")]
    RateUnavailable {
        from: CurrencyCode,
        to: CurrencyCode,
    },

    /// No fee schedule entry for the route/method combination.
    #[error("no fee schedule entry for {direction} via {payment_method}/{receiving_method}")]
    FeeScheduleUnavailable {
        direction: String,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
    },

    /// A promo code was supplied but cannot be applied.
    #[error("promo code {code} rejected: {reason}")]
    PromoCodeInvalid {
        code: String,
        reason: PromoRejection,
    },

    /// Rolling weekly sent total would exceed the route's cap.
    #[error("weekly transfer limit exceeded: cap is {cap} {currency}")]
    LimitExceeded {
        cap: Decimal,
        currency: CurrencyCode,
    },
}

/// Result type for calculation operations.
pub type CalcResult<T> = Result<T, CalcError>;
