use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::transactions_model::{Transaction, TransactionStatus, TransactionType};

/// Returns the five sample transactions shown before any real activity.
///
/// Dates are relative to `now` so the seed always looks recent.
pub fn seed_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        seed(
            "tx1",
            dec!(1200.00),
            TransactionType::Received,
            now - Duration::days(2),
            "Salary Deposit",
            None,
        ),
        seed(
            "tx2",
            dec!(350.50),
            TransactionType::Sent,
            now - Duration::days(4),
            "Electricity Bill",
            Some("DESCO"),
        ),
        seed(
            "tx3",
            dec!(500.00),
            TransactionType::Payment,
            now - Duration::days(7),
            "Mobile Recharge",
            None,
        ),
        seed(
            "tx4",
            dec!(2000.00),
            TransactionType::Sent,
            now - Duration::days(10),
            "Rent Payment",
            Some("Landlord"),
        ),
        seed(
            "tx5",
            dec!(800.00),
            TransactionType::Payment,
            now - Duration::days(15),
            "Internet Bill",
            None,
        ),
    ]
}

fn seed(
    id: &str,
    amount: Decimal,
    kind: TransactionType,
    date: DateTime<Utc>,
    description: &str,
    receiver: Option<&str>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        kind,
        date,
        description: description.to_string(),
        status: TransactionStatus::Completed,
        receiver: receiver.map(str::to_string),
        receiver_bank: None,
    }
}
