//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Card network printed on the simulated card for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    #[default]
    Visa,
    Mastercard,
}

impl CardNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::Mastercard => "mastercard",
        }
    }
}

/// Domain model representing a simulated bank account.
///
/// `account_no` is a masked display string (e.g. `4012 XXXX XXXX 9081`) and is
/// never parsed. `balance` is expected to stay non-negative but nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_no: String,
    pub card_type: CardNetwork,
    pub balance: Decimal,
    pub currency: String,
}

impl Account {
    /// Formats an amount with this account's currency symbol.
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{}{:.*}",
            self.currency,
            crate::constants::DISPLAY_DECIMAL_PRECISION as usize,
            amount
        )
    }

    /// Last four digits of the masked account number, if present.
    ///
    /// Returns `None` unless the final four characters are ASCII digits.
    pub fn last_four(&self) -> Option<&str> {
        let digits = self.account_no.trim();
        let (start, _) = digits.char_indices().rev().nth(3)?;
        let tail = &digits[start..];
        tail.chars().all(|c| c.is_ascii_digit()).then_some(tail)
    }
}
