#[cfg(test)]
mod tests {
    use crate::transactions::{
        Transaction, TransactionQuery, TransactionSort, TransactionStatus, TransactionType,
    };
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn tx(id: &str, amount: Decimal, kind: TransactionType, days_ago: i64, desc: &str) -> Transaction {
        let base = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        Transaction {
            id: id.to_string(),
            amount,
            kind,
            date: base - Duration::days(days_ago),
            description: desc.to_string(),
            status: TransactionStatus::Completed,
            receiver: None,
            receiver_bank: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("a", dec!(100), TransactionType::Sent, 3, "Rent Payment"),
            tx("b", dec!(1200), TransactionType::Received, 1, "Salary Deposit"),
            tx("c", dec!(50), TransactionType::Payment, 5, "Electricity BILL"),
            tx("d", dec!(800), TransactionType::Payment, 2, "Internet Bill"),
        ]
    }

    fn ids(list: &[Transaction]) -> Vec<&str> {
        list.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn default_query_sorts_newest_first() {
        let result = TransactionQuery::new().apply(&sample());
        assert_eq!(ids(&result), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn filters_by_type() {
        let result = TransactionQuery::new()
            .kind(TransactionType::Payment)
            .apply(&sample());
        assert_eq!(ids(&result), vec!["d", "c"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let result = TransactionQuery::new().search("bill").apply(&sample());
        assert_eq!(ids(&result), vec!["d", "c"]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let result = TransactionQuery::new().search("   ").apply(&sample());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn combines_type_and_search() {
        let result = TransactionQuery::new()
            .kind(TransactionType::Sent)
            .search("bill")
            .apply(&sample());
        assert!(result.is_empty());
    }

    #[test]
    fn sort_orders() {
        let data = sample();
        let asc = TransactionQuery::new()
            .sort(TransactionSort::DateAsc)
            .apply(&data);
        assert_eq!(ids(&asc), vec!["c", "a", "d", "b"]);

        let by_amount = TransactionQuery::new()
            .sort(TransactionSort::AmountDesc)
            .apply(&data);
        assert_eq!(ids(&by_amount), vec!["b", "d", "a", "c"]);

        let by_amount_asc = TransactionQuery::new()
            .sort(TransactionSort::AmountAsc)
            .apply(&data);
        assert_eq!(ids(&by_amount_asc), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let data = sample();
        let _ = TransactionQuery::new().sort(TransactionSort::AmountAsc).apply(&data);
        assert_eq!(ids(&data), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn sort_parses_kebab_case() {
        assert_eq!(
            TransactionSort::from_str("amount-desc").unwrap(),
            TransactionSort::AmountDesc
        );
        assert!(TransactionSort::from_str("newest").is_err());
    }
}
