#[cfg(test)]
mod tests {
    use crate::accounts::seed_accounts;
    use crate::constants::{ACCOUNTS_STORAGE_KEY, TRANSACTIONS_STORAGE_KEY};
    use crate::errors::Error;
    use crate::persistence::{
        load_accounts, load_transactions, save_accounts, save_snapshot, save_transactions,
        InMemoryKeyValueStore, KeyValueStore,
    };
    use crate::transactions::seed_transactions;
    use chrono::Utc;

    #[test]
    fn missing_keys_load_as_none() {
        let storage = InMemoryKeyValueStore::new();
        assert!(load_accounts(&storage).unwrap().is_none());
        assert!(load_transactions(&storage).unwrap().is_none());
    }

    #[test]
    fn accounts_round_trip() {
        let storage = InMemoryKeyValueStore::new();
        let accounts = seed_accounts();

        save_accounts(&storage, &accounts).unwrap();

        assert_eq!(load_accounts(&storage).unwrap(), Some(accounts));
    }

    #[test]
    fn transactions_round_trip_keeps_timestamps() {
        let storage = InMemoryKeyValueStore::new();
        let transactions = seed_transactions(Utc::now());

        save_transactions(&storage, &transactions).unwrap();
        let loaded = load_transactions(&storage).unwrap().unwrap();

        assert_eq!(loaded, transactions);
    }

    #[test]
    fn snapshot_writes_both_keys() {
        let storage = InMemoryKeyValueStore::new();
        save_snapshot(&storage, &seed_accounts(), &seed_transactions(Utc::now())).unwrap();

        assert!(storage.get(ACCOUNTS_STORAGE_KEY).unwrap().is_some());
        assert!(storage.get(TRANSACTIONS_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let storage = InMemoryKeyValueStore::with_entries([
            (ACCOUNTS_STORAGE_KEY, "{not json"),
            (TRANSACTIONS_STORAGE_KEY, r#"[{"id":"tx1"}]"#),
        ]);

        assert!(matches!(load_accounts(&storage), Err(Error::Decode(_))));
        assert!(matches!(load_transactions(&storage), Err(Error::Decode(_))));
    }
}
