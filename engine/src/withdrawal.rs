//! Mobile-money withdrawal fee brackets.
//!
//! Airtel Money and Moov Money charge the beneficiary a tiered fee when
//! cashing out in XAF. When the sender chooses to absorb that fee, the
//! engine computes it from the bracket schedule below:
//!
//! - up to a rail-specific ceiling: 3% of the amount,
//! - above that, up to 500,000 XAF: a flat 5,000 XAF,
//! - beyond 500,000 XAF: 5,000 XAF per full 500,000 tranche, with the
//!   remainder evaluated against the first two brackets again.
//!
//! Every component is rounded to the nearest 5 francs.

use kundapay_common::ReceivingMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rounding::round_to_nearest_five;

/// Bracket constants, in XAF.
mod schedule {
    use rust_decimal::Decimal;

    /// Rate charged in the proportional bracket (3%).
    pub fn proportional_rate() -> Decimal {
        Decimal::new(3, 2)
    }

    /// Ceiling of the proportional bracket for Airtel Money.
    pub fn airtel_proportional_ceiling() -> Decimal {
        Decimal::from(166_670)
    }

    /// Ceiling of the proportional bracket for Moov Money.
    pub fn moov_proportional_ceiling() -> Decimal {
        Decimal::from(160_000)
    }

    /// Ceiling of the flat bracket, also the tranche size.
    pub fn flat_ceiling() -> Decimal {
        Decimal::from(500_000)
    }

    /// Fee charged in the flat bracket and per full tranche.
    pub fn flat_fee() -> Decimal {
        Decimal::from(5_000)
    }
}

/// One line of a withdrawal fee breakdown, in XAF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalFeeLine {
    /// Portion of the amount this bracket covers.
    pub bracket_amount: Decimal,
    /// Fee charged for that portion.
    pub bracket_fee: Decimal,
    /// Human-readable bracket description.
    pub description: String,
}

/// A computed withdrawal fee with its bracket breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalFee {
    /// Total fee in XAF, rounded to the nearest 5.
    pub total: Decimal,
    /// Ordered bracket lines summing (before the final rounding) to `total`.
    pub breakdown: Vec<WithdrawalFeeLine>,
}

impl WithdrawalFee {
    /// A zero fee with no brackets.
    pub fn zero() -> Self {
        Self {
            total: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }
}

/// Compute the cash-out fee for an amount withdrawn in XAF.
///
/// Pure function of its inputs. Methods other than the two mobile-money
/// rails have no withdrawal fee and yield [`WithdrawalFee::zero`].
pub fn compute(amount_xaf: Decimal, method: ReceivingMethod) -> WithdrawalFee {
    let proportional_ceiling = match method {
        ReceivingMethod::AirtelMoney => schedule::airtel_proportional_ceiling(),
        ReceivingMethod::MoovMoney => schedule::moov_proportional_ceiling(),
        _ => return WithdrawalFee::zero(),
    };

    let mut breakdown = Vec::new();

    let tranches = (amount_xaf / schedule::flat_ceiling()).floor();
    let remainder = if amount_xaf > schedule::flat_ceiling() {
        let covered = tranches * schedule::flat_ceiling();
        breakdown.push(WithdrawalFeeLine {
            bracket_amount: covered,
            bracket_fee: tranches * schedule::flat_fee(),
            description: format!(
                "{} tranche(s) of {} XAF at {} XAF each",
                tranches,
                schedule::flat_ceiling(),
                schedule::flat_fee()
            ),
        });
        amount_xaf - covered
    } else {
        amount_xaf
    };

    if remainder > Decimal::ZERO {
        breakdown.push(base_bracket(remainder, proportional_ceiling));
    }

    let total = round_to_nearest_five(
        breakdown
            .iter()
            .map(|line| line.bracket_fee)
            .sum::<Decimal>(),
    );

    WithdrawalFee { total, breakdown }
}

/// Evaluate the proportional/flat brackets for an amount at or below the
/// flat ceiling.
fn base_bracket(amount: Decimal, proportional_ceiling: Decimal) -> WithdrawalFeeLine {
    if amount <= proportional_ceiling {
        WithdrawalFeeLine {
            bracket_amount: amount,
            bracket_fee: round_to_nearest_five(amount * schedule::proportional_rate()),
            description: format!("3% on {} XAF", amount),
        }
    } else {
        WithdrawalFeeLine {
            bracket_amount: amount,
            bracket_fee: schedule::flat_fee(),
            description: format!(
                "flat {} XAF fee up to {} XAF",
                schedule::flat_fee(),
                schedule::flat_ceiling()
            ),
        }
    }
}
