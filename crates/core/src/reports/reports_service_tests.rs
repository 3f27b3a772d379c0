#[cfg(test)]
mod tests {
    use crate::reports::{
        monthly_summaries, period_summary, spending_categories, type_breakdown, weekly_overview,
        PeriodSummary, SpendingCategory,
    };
    use crate::transactions::{Transaction, TransactionStatus, TransactionType};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn tx(
        amount: Decimal,
        kind: TransactionType,
        (y, m, d): (i32, u32, u32),
        desc: &str,
    ) -> Transaction {
        Transaction {
            id: format!("{}-{}-{}-{}", y, m, d, desc),
            amount,
            kind,
            date: Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap(),
            description: desc.to_string(),
            status: TransactionStatus::Completed,
            receiver: None,
            receiver_bank: None,
        }
    }

    fn history() -> Vec<Transaction> {
        vec![
            tx(dec!(1200), TransactionType::Received, (2024, 6, 3), "Salary Deposit"),
            tx(dec!(350.50), TransactionType::Sent, (2024, 6, 9), "Electricity Bill"),
            tx(dec!(500), TransactionType::Payment, (2024, 6, 16), "Mobile Recharge"),
            tx(dec!(2000), TransactionType::Sent, (2024, 6, 28), "BEFTN Transfer to 123"),
            tx(dec!(80), TransactionType::Payment, (2024, 5, 20), "Food court"),
            tx(dec!(40), TransactionType::Payment, (2024, 5, 21), "Corner Store"),
            tx(dec!(300), TransactionType::Withdrawal, (2024, 6, 1), "Withdrawal to 01"),
            tx(dec!(999), TransactionType::Deposit, (2024, 4, 2), "Deposit"),
            tx(dec!(700), TransactionType::Received, (2023, 12, 31), "Gift"),
        ]
    }

    #[test]
    fn period_summary_counts_only_income_and_expenses() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();

        let summary = period_summary(&history(), start, end);

        assert_eq!(
            summary,
            PeriodSummary {
                income: dec!(1200),
                expenses: dec!(2850.50),
            }
        );
        assert_eq!(summary.net(), dec!(-1650.50));
    }

    #[test]
    fn monthly_summaries_are_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let months = monthly_summaries(&history(), today, 3);

        let labels: Vec<&str> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Apr 2024", "May 2024", "Jun 2024"]);
        assert_eq!(months[0].summary, PeriodSummary::default());
        assert_eq!(months[1].summary.expenses, dec!(120));
        assert_eq!(months[2].summary.income, dec!(1200));
    }

    #[test]
    fn monthly_summaries_cross_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let months = monthly_summaries(&history(), today, 2);

        assert_eq!(months[0].year, 2023);
        assert_eq!(months[0].month, 12);
        assert_eq!(months[0].summary.income, dec!(700));
        assert_eq!(months[1].label, "Jan 2024");
    }

    #[test]
    fn zero_months_is_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert!(monthly_summaries(&history(), today, 0).is_empty());
    }

    #[test]
    fn weekly_overview_buckets_by_day() {
        let overview = weekly_overview(&history(), 2024, 6);

        assert_eq!(overview.weeks[0].income, dec!(1200));
        assert_eq!(overview.weeks[1].expenses, dec!(350.50));
        assert_eq!(overview.weeks[2].expenses, dec!(500));
        assert_eq!(overview.weeks[3].expenses, dec!(2000));
        assert_eq!(overview.total.expenses, dec!(2850.50));
        assert_eq!(overview.total.income, dec!(1200));
    }

    #[test]
    fn type_breakdown_skips_absent_types() {
        let breakdown = type_breakdown(&history()[..4]);

        assert_eq!(
            breakdown,
            vec![
                (TransactionType::Sent, 2),
                (TransactionType::Received, 1),
                (TransactionType::Payment, 1),
            ]
        );
    }

    #[test]
    fn spending_categories_use_description_keywords() {
        let categories = spending_categories(&history());

        assert_eq!(
            categories,
            vec![
                (SpendingCategory::Bills, dec!(350.50)),
                (SpendingCategory::Transfers, dec!(2000)),
                (SpendingCategory::Shopping, dec!(40)),
                (SpendingCategory::Food, dec!(80)),
                (SpendingCategory::Other, dec!(500)),
            ]
        );
    }

    #[test]
    fn classify_prefers_bills_over_later_matches() {
        assert_eq!(
            SpendingCategory::classify("Water bill transfer"),
            SpendingCategory::Bills
        );
        assert_eq!(
            SpendingCategory::classify("Restaurant"),
            SpendingCategory::Food
        );
        assert_eq!(SpendingCategory::classify(""), SpendingCategory::Other);
    }
}
