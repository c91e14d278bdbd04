//! Bidirectional amount solver.
//!
//! One entry point, [`calculate`], solves the transfer equation in either
//! direction: from a sent amount to what the beneficiary receives, or from a
//! target received amount back to what the sender must pay, optionally
//! absorbing the mobile-money withdrawal fee into the sent side.

use chrono::{DateTime, Utc};
use kundapay_common::{
    CurrencyCode, Money, PaymentMethod, ReceivingMethod, Route, UnsupportedRoute,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{CalcError, CalcResult};
use crate::snapshot::TableSnapshot;
use crate::withdrawal::{self, WithdrawalFee, WithdrawalFeeLine};
use crate::{limits, rounding};

/// Which amount the caller knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountRole {
    /// The known amount is what the sender pays (before fees are deducted).
    Send,
    /// The known amount is what the beneficiary must receive.
    Receive,
}

/// A request to price one transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The one amount the caller knows, in the currency implied by its role.
    pub known_amount: Decimal,
    /// Whether `known_amount` is the sent or the received amount.
    pub known_amount_role: AmountRole,
    /// Origin/destination country pair.
    pub route: Route,
    /// How the sender funds the transfer.
    pub payment_method: PaymentMethod,
    /// How the beneficiary receives the funds.
    pub receiving_method: ReceivingMethod,
    /// Optional promo code; if supplied it must be applicable.
    pub promo_code: Option<String>,
    /// Whether the sender absorbs the mobile-money withdrawal fee.
    pub include_withdrawal_fees: bool,
}

impl CalculationRequest {
    /// Request pricing from a known sent amount.
    pub fn send(
        amount: Decimal,
        route: Route,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
    ) -> Self {
        Self {
            known_amount: amount,
            known_amount_role: AmountRole::Send,
            route,
            payment_method,
            receiving_method,
            promo_code: None,
            include_withdrawal_fees: false,
        }
    }

    /// Request pricing from a known received amount.
    pub fn receive(
        amount: Decimal,
        route: Route,
        payment_method: PaymentMethod,
        receiving_method: ReceivingMethod,
    ) -> Self {
        Self {
            known_amount: amount,
            known_amount_role: AmountRole::Receive,
            route,
            payment_method,
            receiving_method,
            promo_code: None,
            include_withdrawal_fees: false,
        }
    }

    /// Apply a promo code.
    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    /// Absorb the withdrawal fee into the sent amount.
    pub fn with_withdrawal_fees(mut self) -> Self {
        self.include_withdrawal_fees = true;
        self
    }
}

/// The priced transfer. Immutable; downstream layers persist and display it
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Quotation id.
    pub id: Uuid,
    /// When the quotation was produced.
    pub computed_at: DateTime<Utc>,
    /// Canonical `{ORIGIN}_TO_{DESTINATION}` token.
    pub direction: String,
    /// Amount the sender pays, fees included, in the sender's currency.
    pub amount_sent: Money,
    /// Amount the beneficiary receives, in the destination currency.
    pub amount_received: Money,
    /// KundaPay's own fee, in the sender's currency.
    pub kundapay_fee: Money,
    /// Absorbed withdrawal fee, converted to the sender's currency.
    pub withdrawal_fee: Money,
    /// Withdrawal fee bracket lines, in XAF.
    pub withdrawal_fee_breakdown: Vec<WithdrawalFeeLine>,
    /// KundaPay fee plus withdrawal fee, in the sender's currency.
    pub total_fee: Money,
    /// Rate applied, sender currency to destination currency.
    pub exchange_rate: Decimal,
    /// Fee percentage after any promo discount.
    pub effective_fee_percentage: Decimal,
    /// Echoed payment method.
    pub payment_method: PaymentMethod,
    /// Echoed receiving method.
    pub receiving_method: ReceivingMethod,
    /// Echoed promo code, if one was applied.
    pub promo_code: Option<String>,
    /// Echoed withdrawal-fee-inclusion flag.
    pub include_withdrawal_fees: bool,
}

impl CalculationResult {
    /// Currency the sender pays in.
    pub fn sender_currency(&self) -> CurrencyCode {
        self.amount_sent.currency
    }

    /// Currency the beneficiary receives in.
    pub fn receiver_currency(&self) -> CurrencyCode {
        self.amount_received.currency
    }
}

/// Unrounded amounts produced by one solver branch. Sent-side values are in
/// the sender's currency, `received` in the destination currency.
struct RawAmounts {
    sent: Decimal,
    kundapay_fee: Decimal,
    received: Decimal,
    withdrawal_fee_sender: Decimal,
    withdrawal: WithdrawalFee,
}

/// Price one transfer against a table snapshot.
///
/// Pure function of the request, the snapshot and `now`; safe to call
/// concurrently. Either fully succeeds or fails with a [`CalcError`] — no
/// partial results.
#[instrument(skip(request, tables), fields(
    direction = %request.route,
    role = ?request.known_amount_role,
    amount = %request.known_amount
))]
pub fn calculate(
    request: &CalculationRequest,
    tables: &TableSnapshot,
    now: DateTime<Utc>,
) -> CalcResult<CalculationResult> {
    if request.known_amount <= Decimal::ZERO {
        return Err(CalcError::InvalidAmount(request.known_amount));
    }

    // Routes built through Route::new are already valid; re-check here so a
    // deserialized request cannot smuggle in an unsupported pair.
    if !request.route.is_supported() {
        return Err(CalcError::InvalidRoute(UnsupportedRoute {
            origin: request.route.origin,
            destination: request.route.destination,
        }));
    }

    let sender_currency = request.route.sender_currency();
    let receiver_currency = request.route.receiver_currency();

    let rate = tables.rates.resolve(sender_currency, receiver_currency)?;
    let base_percentage = tables.fee_schedule.fee_percentage(
        &request.route,
        request.payment_method,
        request.receiving_method,
    )?;

    let effective_percentage = match &request.promo_code {
        Some(code) => {
            let promo = tables.promo_codes.evaluate(code, &request.route, now)?;
            promo
                .discount
                .effective_percentage(base_percentage, request.known_amount)
        }
        None => base_percentage,
    };

    let withdrawal_applies = request.include_withdrawal_fees
        && receiver_currency == CurrencyCode::Xaf
        && request.receiving_method.is_mobile_money();

    let raw = solve(
        request.known_amount,
        request.known_amount_role,
        rate,
        effective_percentage,
        withdrawal_applies.then_some(request.receiving_method),
    );

    let amount_sent = rounding::round_sent(raw.sent, sender_currency);
    let kundapay_fee = rounding::round_fee(raw.kundapay_fee, sender_currency);
    let amount_received = rounding::round_received(raw.received, receiver_currency);
    let withdrawal_fee = rounding::round_fee(raw.withdrawal_fee_sender, sender_currency);
    let total_fee = kundapay_fee + withdrawal_fee;

    limits::validate(amount_sent, &request.route, tables.weekly_sent_total)?;

    let result = CalculationResult {
        id: Uuid::now_v7(),
        computed_at: now,
        direction: request.route.direction(),
        amount_sent: Money::new(amount_sent, sender_currency),
        amount_received: Money::new(amount_received, receiver_currency),
        kundapay_fee: Money::new(kundapay_fee, sender_currency),
        withdrawal_fee: Money::new(withdrawal_fee, sender_currency),
        withdrawal_fee_breakdown: raw.withdrawal.breakdown,
        total_fee: Money::new(total_fee, sender_currency),
        exchange_rate: rate,
        effective_fee_percentage: effective_percentage,
        payment_method: request.payment_method,
        receiving_method: request.receiving_method,
        promo_code: request.promo_code.clone(),
        include_withdrawal_fees: request.include_withdrawal_fees,
    };

    info!(
        quotation_id = %result.id,
        amount_sent = %result.amount_sent,
        amount_received = %result.amount_received,
        total_fee = %result.total_fee,
        "Calculation completed"
    );

    Ok(result)
}

/// The four solver branches: known role crossed with whether the withdrawal
/// fee is absorbed. `withdrawal_method` is `Some` only when the fee applies.
fn solve(
    known: Decimal,
    role: AmountRole,
    rate: Decimal,
    percentage: Decimal,
    withdrawal_method: Option<ReceivingMethod>,
) -> RawAmounts {
    match (role, withdrawal_method) {
        (AmountRole::Send, None) => {
            let sent = known;
            let fee = sent * percentage;
            RawAmounts {
                sent,
                kundapay_fee: fee,
                received: (sent - fee) * rate,
                withdrawal_fee_sender: Decimal::ZERO,
                withdrawal: WithdrawalFee::zero(),
            }
        }
        (AmountRole::Receive, None) => {
            let received = known;
            let sent = received / (rate * (Decimal::ONE - percentage));
            RawAmounts {
                sent,
                kundapay_fee: sent * percentage,
                received,
                withdrawal_fee_sender: Decimal::ZERO,
                withdrawal: WithdrawalFee::zero(),
            }
        }
        (AmountRole::Send, Some(method)) => {
            let sent = known;
            let fee = sent * percentage;
            let base_received = (sent - fee) * rate;
            let withdrawal = withdrawal::compute(base_received, method);
            RawAmounts {
                sent,
                kundapay_fee: fee,
                received: base_received - withdrawal.total,
                withdrawal_fee_sender: withdrawal.total / rate,
                withdrawal,
            }
        }
        (AmountRole::Receive, Some(method)) => {
            // Approximate inverse: solve as if there were no withdrawal fee,
            // evaluate the brackets on that pre-withdrawal figure, and add
            // the fee back onto the sent side. The realized net amount can
            // drift from the requested target when adding the fee crosses a
            // bracket boundary; historical transfer records were produced
            // this way, so parity matters more than exactness.
            let base_sent = known / (rate * (Decimal::ONE - percentage));
            let fee = base_sent * percentage;
            let base_received = (base_sent - fee) * rate;
            let withdrawal = withdrawal::compute(base_received, method);
            let withdrawal_fee_sender = withdrawal.total / rate;
            RawAmounts {
                sent: base_sent + withdrawal_fee_sender,
                kundapay_fee: fee,
                received: known,
                withdrawal_fee_sender,
                withdrawal,
            }
        }
    }
}
