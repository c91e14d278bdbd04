//! Payment and receiving method tags.
//!
//! Which (route, payment, receiving) triples are actually offered is decided
//! by the fee schedule alone; these enums only close the tag set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the sender funds the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    AirtelMoney,
    MoovMoney,
    BankTransfer,
    Card,
    Paypal,
    Wero,
    Alipay,
    Ach,
    VisaDirect,
    MastercardSend,
    Interac,
    Cash,
    Bitcoin,
}

impl PaymentMethod {
    /// The canonical tag string.
    pub fn tag(&self) -> &'static str {
        match self {
            PaymentMethod::AirtelMoney => "AIRTEL_MONEY",
            PaymentMethod::MoovMoney => "MOOV_MONEY",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::Wero => "WERO",
            PaymentMethod::Alipay => "ALIPAY",
            PaymentMethod::Ach => "ACH",
            PaymentMethod::VisaDirect => "VISA_DIRECT",
            PaymentMethod::MastercardSend => "MASTERCARD_SEND",
            PaymentMethod::Interac => "INTERAC",
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Bitcoin => "BITCOIN",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// How the beneficiary receives the funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceivingMethod {
    AirtelMoney,
    MoovMoney,
    BankTransfer,
    Card,
    Paypal,
    Wero,
    Alipay,
    Ach,
    VisaDirect,
    MastercardSend,
    Interac,
    Cash,
    Bitcoin,
}

impl ReceivingMethod {
    /// The canonical tag string.
    pub fn tag(&self) -> &'static str {
        match self {
            ReceivingMethod::AirtelMoney => "AIRTEL_MONEY",
            ReceivingMethod::MoovMoney => "MOOV_MONEY",
            ReceivingMethod::BankTransfer => "BANK_TRANSFER",
            ReceivingMethod::Card => "CARD",
            ReceivingMethod::Paypal => "PAYPAL",
            ReceivingMethod::Wero => "WERO",
            ReceivingMethod::Alipay => "ALIPAY",
            ReceivingMethod::Ach => "ACH",
            ReceivingMethod::VisaDirect => "VISA_DIRECT",
            ReceivingMethod::MastercardSend => "MASTERCARD_SEND",
            ReceivingMethod::Interac => "INTERAC",
            ReceivingMethod::Cash => "CASH",
            ReceivingMethod::Bitcoin => "BITCOIN",
        }
    }

    /// Whether this method is a Gabonese mobile-money cash-out rail.
    ///
    /// Only these rails charge the tiered withdrawal fee.
    pub fn is_mobile_money(&self) -> bool {
        matches!(
            self,
            ReceivingMethod::AirtelMoney | ReceivingMethod::MoovMoney
        )
    }
}

impl fmt::Display for ReceivingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
