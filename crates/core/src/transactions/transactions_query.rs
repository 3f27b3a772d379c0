//! Filtering and ordering of transaction history.

use serde::{Deserialize, Serialize};

use super::transactions_model::{Transaction, TransactionType};

/// Ordering applied to a history listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionSort {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl std::str::FromStr for TransactionSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-desc" => Ok(TransactionSort::DateDesc),
            "date-asc" => Ok(TransactionSort::DateAsc),
            "amount-desc" => Ok(TransactionSort::AmountDesc),
            "amount-asc" => Ok(TransactionSort::AmountAsc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

/// History filter: optional type, optional description search, and an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub kind: Option<TransactionType>,
    pub search: Option<String>,
    #[serde(default)]
    pub sort: TransactionSort,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sort(mut self, sort: TransactionSort) -> Self {
        self.sort = sort;
        self
    }

    /// Returns true if `tx` passes the type filter and the search term.
    ///
    /// Search is a case-insensitive substring match on the description; an
    /// empty term matches everything.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => tx
                .description
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        }
    }

    /// Applies the filter and ordering to `transactions` without mutating them.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut result: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect();

        match self.sort {
            TransactionSort::DateDesc => result.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSort::DateAsc => result.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSort::AmountDesc => result.sort_by(|a, b| b.amount.cmp(&a.amount)),
            TransactionSort::AmountAsc => result.sort_by(|a, b| a.amount.cmp(&b.amount)),
        }

        result
    }
}
