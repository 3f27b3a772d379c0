//! Aggregations over transaction history.
//!
//! All functions are pure: they take a slice of transactions and a reference
//! date where one is needed, and never touch the store.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::reports_model::{MonthlySummary, PeriodSummary, SpendingCategory, WeeklyOverview};
use crate::transactions::{Transaction, TransactionType};

/// Income and expenses for transactions dated in `[start, end)`.
pub fn period_summary(
    transactions: &[Transaction],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> PeriodSummary {
    transactions
        .iter()
        .filter(|tx| tx.date >= start && tx.date < end)
        .fold(PeriodSummary::default(), accumulate)
}

/// Summaries for the last `months` calendar months ending with `today`'s month.
///
/// Results are ordered oldest first.
pub fn monthly_summaries(
    transactions: &[Transaction],
    today: NaiveDate,
    months: u32,
) -> Vec<MonthlySummary> {
    let current = first_of_month(today);

    (0..months)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .map(|month_start| {
            let summary = transactions
                .iter()
                .filter(|tx| first_of_month(tx.date.date_naive()) == month_start)
                .fold(PeriodSummary::default(), accumulate);
            MonthlySummary {
                year: month_start.year(),
                month: month_start.month(),
                label: month_start.format("%b %Y").to_string(),
                summary,
            }
        })
        .collect()
}

/// Four-bucket view of a single month.
pub fn weekly_overview(transactions: &[Transaction], year: i32, month: u32) -> WeeklyOverview {
    let mut overview = WeeklyOverview::default();

    for tx in transactions {
        let date = tx.date.date_naive();
        if date.year() != year || date.month() != month {
            continue;
        }
        let bucket = week_bucket(date.day());
        overview.weeks[bucket] = accumulate(overview.weeks[bucket], tx);
        overview.total = accumulate(overview.total, tx);
    }

    overview
}

/// Number of transactions per type, for types that occur at least once.
pub fn type_breakdown(transactions: &[Transaction]) -> Vec<(TransactionType, usize)> {
    TransactionType::ALL
        .into_iter()
        .map(|kind| (kind, transactions.iter().filter(|tx| tx.kind == kind).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Outgoing `sent` and `payment` totals per spending category.
///
/// Categories with nothing in them are left out.
pub fn spending_categories(transactions: &[Transaction]) -> Vec<(SpendingCategory, Decimal)> {
    let mut totals = [Decimal::ZERO; 5];

    for tx in transactions.iter().filter(|tx| is_expense(tx.kind)) {
        let category = SpendingCategory::classify(&tx.description);
        totals[category as usize] += tx.amount;
    }

    SpendingCategory::ALL
        .into_iter()
        .zip(totals)
        .filter(|(_, total)| *total > Decimal::ZERO)
        .collect()
}

fn accumulate(mut summary: PeriodSummary, tx: &Transaction) -> PeriodSummary {
    match tx.kind {
        TransactionType::Received => summary.income += tx.amount,
        kind if is_expense(kind) => summary.expenses += tx.amount,
        _ => {}
    }
    summary
}

fn is_expense(kind: TransactionType) -> bool {
    matches!(kind, TransactionType::Sent | TransactionType::Payment)
}

fn week_bucket(day: u32) -> usize {
    match day {
        1..=7 => 0,
        8..=14 => 1,
        15..=21 => 2,
        _ => 3,
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
