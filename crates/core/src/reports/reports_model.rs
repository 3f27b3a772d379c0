//! Report output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money in and money out over some period.
///
/// Income counts `received`; expenses count `sent` and `payment`. Deposits
/// and withdrawals move cash between the account and its owner, so neither
/// side counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub income: Decimal,
    pub expenses: Decimal,
}

impl PeriodSummary {
    pub fn net(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Summary of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    /// Short label such as `Jun 2024`.
    pub label: String,
    pub summary: PeriodSummary,
}

/// A month split into four buckets by day: 1-7, 8-14, 15-21, 22 onward.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyOverview {
    pub weeks: [PeriodSummary; 4],
    pub total: PeriodSummary,
}

/// Keyword buckets for outgoing money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpendingCategory {
    Bills,
    Transfers,
    Shopping,
    Food,
    Other,
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 5] = [
        SpendingCategory::Bills,
        SpendingCategory::Transfers,
        SpendingCategory::Shopping,
        SpendingCategory::Food,
        SpendingCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpendingCategory::Bills => "Bills",
            SpendingCategory::Transfers => "Transfers",
            SpendingCategory::Shopping => "Shopping",
            SpendingCategory::Food => "Food",
            SpendingCategory::Other => "Other",
        }
    }

    /// Picks a category from a transaction description. First match wins.
    pub fn classify(description: &str) -> SpendingCategory {
        let desc = description.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| desc.contains(w));

        if has(&["bill", "electricity", "water"]) {
            SpendingCategory::Bills
        } else if has(&["transfer"]) {
            SpendingCategory::Transfers
        } else if has(&["shop", "store"]) {
            SpendingCategory::Shopping
        } else if has(&["food", "restaurant"]) {
            SpendingCategory::Food
        } else {
            SpendingCategory::Other
        }
    }
}
