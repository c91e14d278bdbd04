//! Caller-assembled lookup table snapshot.

use rust_decimal::Decimal;

use crate::fees::FeeSchedule;
use crate::promo::{PromoCode, PromoCodeTable};
use crate::rates::ExchangeRateTable;

/// Read-only snapshot of every table one calculation reads.
///
/// There is deliberately no process-wide table state: the caller assembles a
/// snapshot and passes it in by reference. All fields feeding a single
/// request must come from one consistent read (one transaction or one
/// batched fetch) — mixing a stale rate with a fresh fee percentage produces
/// a result that looks valid but is internally inconsistent, and the engine
/// has no way to detect it.
#[derive(Debug, Clone, Default)]
pub struct TableSnapshot {
    /// Exchange rates.
    pub rates: ExchangeRateTable,
    /// KundaPay fee schedule.
    pub fee_schedule: FeeSchedule,
    /// Promo codes, only consulted when the request carries a code.
    pub promo_codes: PromoCodeTable,
    /// The requesting user's sent total over the trailing 7 days, in the
    /// sender's currency.
    pub weekly_sent_total: Decimal,
}

impl TableSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rate table (builder style).
    pub fn with_rates(mut self, rates: ExchangeRateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Replace the fee schedule (builder style).
    pub fn with_fee_schedule(mut self, fee_schedule: FeeSchedule) -> Self {
        self.fee_schedule = fee_schedule;
        self
    }

    /// Add a promo code (builder style).
    pub fn with_promo_code(mut self, promo: PromoCode) -> Self {
        self.promo_codes.insert(promo);
        self
    }

    /// Set the rolling weekly sent total (builder style).
    pub fn with_weekly_sent_total(mut self, total: Decimal) -> Self {
        self.weekly_sent_total = total;
        self
    }
}
