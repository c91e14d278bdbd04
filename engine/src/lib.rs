//! KundaPay Calculation Engine
//!
//! Pure fee and exchange calculation for cross-currency transfers: given one
//! known amount (sent or received), a route, a payment/receiving method pair
//! and an optional promo code, produce the full, mutually consistent set of
//! amounts a transfer record is built from.
//!
//! The engine does no I/O and holds no state. Every lookup table it needs
//! (exchange rates, fee schedule, promo codes, the caller's rolling weekly
//! total) is handed in as one [`TableSnapshot`]; the caller is responsible
//! for assembling that snapshot from a single consistent read.
//!
//! # Example
//!
//! ```rust,ignore
//! use kundapay_engine::{calculate, CalculationRequest, TableSnapshot};
//! use kundapay_common::{CountryCode, PaymentMethod, ReceivingMethod, Route};
//!
//! let route = Route::new(CountryCode::France, CountryCode::Gabon)?;
//! let request = CalculationRequest::send(amount, route, PaymentMethod::Card, ReceivingMethod::AirtelMoney);
//!
//! let result = calculate(&request, &snapshot, Utc::now())?;
//! println!("beneficiary receives {}", result.amount_received);
//! ```

pub mod error;
pub mod fees;
pub mod limits;
pub mod promo;
pub mod rates;
pub mod rounding;
pub mod snapshot;
pub mod solver;
pub mod withdrawal;

pub use error::{CalcError, CalcResult};
pub use fees::FeeSchedule;
pub use promo::{Discount, PromoCode, PromoCodeTable, PromoRejection};
pub use rates::ExchangeRateTable;
pub use snapshot::TableSnapshot;
pub use solver::{calculate, AmountRole, CalculationRequest, CalculationResult};
pub use withdrawal::{WithdrawalFee, WithdrawalFeeLine};
