use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use skylet_core::{errors::StorageError, persistence::KeyValueStore, Result};

const CURRENT_VERSION: u32 = 1;

/// Key-value store persisted as `{"version": 1, "entries": {..}}`.
///
/// Every call re-reads the file so that separate processes pointed at the
/// same path see each other's writes. Writes go to a sibling temp file that
/// is renamed over the target. A document that cannot be read is moved aside
/// to `<name>.corrupt` and the store starts over empty.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize, Default)]
struct Document {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn with_entries<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut entries = self.load_entries_locked()?;
        op(&mut entries);
        self.persist_entries_locked(entries)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.load_entries_locked()
    }

    fn load_entries_locked(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(read_failed(&self.path, e)),
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        match decode_document(&raw) {
            Ok(entries) => Ok(entries),
            Err(reason) => {
                self.quarantine_locked(&reason)?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn quarantine_locked(&self, reason: &str) -> Result<()> {
        let target = self.sibling_path(".corrupt");
        warn!(
            "Discarding unreadable storage file {} ({}), moving it to {}",
            self.path.display(),
            reason,
            target.display()
        );
        fs::rename(&self.path, &target).map_err(|e| {
            StorageError::Corrupt(format!(
                "{}: {}; could not move it aside: {}",
                self.path.display(),
                reason,
                e
            ))
        })?;
        Ok(())
    }

    fn persist_entries_locked(&self, entries: BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
        }

        let doc = Document {
            version: CURRENT_VERSION,
            entries,
        };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let tmp = self.sibling_path(".tmp");
        fs::write(&tmp, json).map_err(|e| write_failed(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| write_failed(&self.path, e))?;
        debug!("Persisted {} storage entries to {}", doc.entries.len(), self.path.display());
        Ok(())
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "skylet".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn set_many(&self, batch: &[(&str, String)]) -> Result<()> {
        self.with_entries(|entries| {
            for (key, value) in batch {
                entries.insert((*key).to_string(), value.clone());
            }
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}

fn decode_document(raw: &[u8]) -> std::result::Result<BTreeMap<String, String>, String> {
    let doc: Document = serde_json::from_slice(raw).map_err(|e| e.to_string())?;
    if doc.version != CURRENT_VERSION {
        return Err(format!("unsupported version {}", doc.version));
    }
    Ok(doc.entries)
}

fn read_failed(path: &Path, err: io::Error) -> skylet_core::Error {
    StorageError::ReadFailed(format!("{}: {}", path.display(), err)).into()
}

fn write_failed(path: &Path, err: io::Error) -> skylet_core::Error {
    StorageError::WriteFailed(format!("{}: {}", path.display(), err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylet_core::accounts::SEED_ACCOUNT_ID;
    use skylet_core::events::NoOpDomainEventSink;
    use skylet_core::auth::{DEMO_PASSWORD, DEMO_USERNAME};
    use skylet_core::{BankContext, BankStore, BankStoreTrait, NewTransaction, TransactionType};
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn round_trip_across_instances() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");

        let store = FileKeyValueStore::new(&file);
        store.set("alpha", "value").unwrap();
        assert_eq!(store.get("alpha").unwrap().as_deref(), Some("value"));

        let reopened = FileKeyValueStore::new(&file);
        assert_eq!(reopened.get("alpha").unwrap().as_deref(), Some("value"));

        reopened.remove("alpha").unwrap();
        assert!(store.get("alpha").unwrap().is_none());
        assert!(file.exists());
    }

    #[test]
    fn missing_or_blank_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");
        let store = FileKeyValueStore::new(&file);

        assert!(store.get("alpha").unwrap().is_none());
        assert!(!file.exists());

        fs::write(&file, "  \n").unwrap();
        assert!(store.get("alpha").unwrap().is_none());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("data").join("skylet.json");
        let store = FileKeyValueStore::new(&file);

        store.set("alpha", "1").unwrap();

        assert!(file.exists());
        assert!(!dir.path().join("nested/data/skylet.json.tmp").exists());
    }

    #[test]
    fn set_many_writes_all_entries() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");
        let store = FileKeyValueStore::new(&file);
        store.set("keep", "old").unwrap();

        store
            .set_many(&[("a", "1".to_string()), ("b", "2".to_string())])
            .unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
        assert_eq!(store.get("keep").unwrap().as_deref(), Some("old"));

        let raw = fs::read_to_string(&file).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["version"], 1);
        assert_eq!(doc["entries"]["a"], "1");
    }

    #[test]
    fn corrupt_file_is_moved_aside_and_replaced() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");
        fs::write(&file, "{ truncated").unwrap();
        let store = FileKeyValueStore::new(&file);

        assert!(store.get("alpha").unwrap().is_none());
        assert_eq!(
            fs::read_to_string(dir.path().join("skylet.json.corrupt")).unwrap(),
            "{ truncated"
        );

        store.set("alpha", "1").unwrap();
        let reopened = FileKeyValueStore::new(&file);
        assert_eq!(reopened.get("alpha").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn unknown_version_is_discarded() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");
        fs::write(&file, r#"{"version": 9, "entries": {"alpha": "old"}}"#).unwrap();
        let store = FileKeyValueStore::new(&file);

        store.set("beta", "2").unwrap();

        assert!(store.get("alpha").unwrap().is_none());
        assert_eq!(store.get("beta").unwrap().as_deref(), Some("2"));
        assert!(dir.path().join("skylet.json.corrupt").exists());
    }

    #[test]
    fn session_persists_after_corrupt_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");
        fs::write(&file, "{ truncated").unwrap();

        let ctx = BankContext::new(
            Arc::new(FileKeyValueStore::new(&file)),
            Arc::new(NoOpDomainEventSink),
        );
        assert!(ctx.login(DEMO_USERNAME, DEMO_PASSWORD));

        let next_run = BankContext::new(
            Arc::new(FileKeyValueStore::new(&file)),
            Arc::new(NoOpDomainEventSink),
        );
        assert!(next_run.is_authenticated());
        assert!(next_run.store().is_some());
    }

    #[test]
    fn bank_store_survives_restart() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("skylet.json");

        let store = BankStore::load(
            Arc::new(FileKeyValueStore::new(&file)),
            Arc::new(NoOpDomainEventSink),
        );
        let tx = store
            .apply_ledger_entry(
                SEED_ACCOUNT_ID,
                NewTransaction::new(dec!(350.50), TransactionType::Payment, "Electricity Bill"),
            )
            .unwrap();

        let reloaded = BankStore::load(
            Arc::new(FileKeyValueStore::new(&file)),
            Arc::new(NoOpDomainEventSink),
        );
        assert_eq!(
            reloaded.get_current_account().unwrap().balance,
            dec!(14649.50)
        );
        assert_eq!(reloaded.transactions()[0].id, tx.id);
        assert_eq!(reloaded.transactions().len(), 6);
    }
}
