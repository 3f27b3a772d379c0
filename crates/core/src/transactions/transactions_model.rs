//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of money movement a transaction records.
///
/// The direction lives here, not in the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sent,
    Received,
    Payment,
    Withdrawal,
    Deposit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Sent,
        TransactionType::Received,
        TransactionType::Payment,
        TransactionType::Withdrawal,
        TransactionType::Deposit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sent => "sent",
            TransactionType::Received => "received",
            TransactionType::Payment => "payment",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Deposit => "deposit",
        }
    }

    /// True for kinds that take money out of the account.
    pub fn is_debit(&self) -> bool {
        matches!(
            self,
            TransactionType::Sent | TransactionType::Payment | TransactionType::Withdrawal
        )
    }

    /// Balance delta for moving `amount` in this direction.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        if self.is_debit() {
            -amount
        } else {
            amount
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown transaction type: {}", s))
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// Domain model representing a recorded money movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "timestamp_format")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_bank: Option<String>,
}

impl Transaction {
    /// Materializes a draft with a fresh identifier and a `completed` status.
    pub fn from_draft(draft: NewTransaction, date: DateTime<Utc>) -> Self {
        Transaction {
            id: new_transaction_id(),
            amount: draft.amount,
            kind: draft.kind,
            date,
            description: draft.description,
            status: TransactionStatus::Completed,
            receiver: draft.receiver,
            receiver_bank: draft.receiver_bank,
        }
    }

    /// Balance delta this transaction represents.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Input model for recording a transaction; the store fills in id, date and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_bank: Option<String>,
}

impl NewTransaction {
    pub fn new(amount: Decimal, kind: TransactionType, description: impl Into<String>) -> Self {
        Self {
            amount,
            kind,
            description: description.into(),
            receiver: None,
            receiver_bank: None,
        }
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn with_receiver_bank(mut self, bank: impl Into<String>) -> Self {
        self.receiver_bank = Some(bank.into());
        self
    }
}

/// Generates a transaction identifier.
///
/// UUID v7 keeps ids roughly time-ordered while its random tail keeps two
/// ids minted in the same millisecond distinct.
pub fn new_transaction_id() -> String {
    format!("tx-{}", Uuid::now_v7())
}

mod timestamp_format {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Date-only values land on midnight UTC
        if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()));
        }

        Err(serde::de::Error::custom(format!(
            "Invalid timestamp format: {}. Expected ISO 8601/RFC3339 or YYYY-MM-DD",
            s
        )))
    }
}
