//! JSON-file-based storage backend.
//!
//! Stores the transaction collection and the settings record in separate
//! JSON files under a configurable directory (default:
//! `$XDG_DATA_HOME/spendbook/`).

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, SpendbookError};
use crate::models::{Settings, Transaction};

/// Application name used for the XDG data directory.
const APP_NAME: &str = "spendbook";

/// File name for the transaction collection record.
const TRANSACTIONS_FILE: &str = "transactions.json";
/// File name for the settings record.
const SETTINGS_FILE: &str = "settings.json";

/// File-backed storage persisting both records as pretty-printed JSON.
///
/// Writes are atomic (write-to-tmp then rename), so a crash mid-save
/// leaves the previous record intact. A single process at a time is
/// assumed; cross-process coordination is out of scope.
///
/// # File layout
///
/// ```text
/// <dir>/
///   transactions.json
///   settings.json
/// ```
#[derive(Debug)]
pub struct FileStorage {
    /// Directory containing both JSON files.
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at the given directory.
    ///
    /// Creates the directory (and parents) if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[inline]
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir).map_err(storage_io_error)?;
        Ok(Self { dir })
    }

    /// Returns the default XDG-compliant data directory for this crate.
    ///
    /// On Linux: `$XDG_DATA_HOME/spendbook/` (typically
    /// `~/.local/share/spendbook/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be
    /// determined.
    #[inline]
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|data_path| data_path.join(APP_NAME))
            .ok_or_else(|| {
                SpendbookError::Storage("could not determine platform data directory".into())
            })
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Returns the full path for a given file name.
    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Reads and deserializes a JSON file. Returns `Ok(None)` if the file
    /// does not exist.
    fn read_record<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(SpendbookError::from),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_io_error(err)),
        }
    }

    /// Atomically writes a serialized JSON file (write-to-tmp then
    /// rename).
    fn write_record<T: Serialize>(&self, name: &str, record: &T) -> Result<()> {
        let path = self.path(name);
        let tmp_path = self.path(&format!("{name}.tmp"));
        let json = serde_json::to_string_pretty(record).map_err(SpendbookError::from)?;
        fs::write(&tmp_path, json).map_err(storage_io_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_io_error)?;
        Ok(())
    }

    /// Removes a record file, tolerating its absence.
    fn remove_record(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage_io_error(err)),
        }
    }
}

/// Wraps an I/O error into a [`SpendbookError::Storage`].
fn storage_io_error(err: std::io::Error) -> SpendbookError {
    SpendbookError::Storage(Box::new(err))
}

impl super::Storage for FileStorage {
    #[inline]
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.read_record(TRANSACTIONS_FILE)?.unwrap_or_default())
    }

    #[inline]
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_record(TRANSACTIONS_FILE, &transactions)
    }

    #[inline]
    fn load_settings(&self) -> Result<Option<Settings>> {
        self.read_record(SETTINGS_FILE)
    }

    #[inline]
    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_record(SETTINGS_FILE, settings)
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.remove_record(TRANSACTIONS_FILE)?;
        self.remove_record(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rates, TransactionId};
    use crate::storage::Storage;
    use chrono::{DateTime, NaiveDate};

    /// Helper to create a [`FileStorage`] in a temporary directory.
    fn temp_storage() -> (FileStorage, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        (storage, dir)
    }

    /// Creates a minimal test transaction.
    fn test_transaction(id: &str, description: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            description: description.to_owned(),
            amount: 1500.0,
            category: "Food".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn missing_files_read_as_empty() {
        let (storage, _dir) = temp_storage();
        assert!(storage.load_transactions().unwrap().is_empty());
        assert!(storage.load_settings().unwrap().is_none());
    }

    #[test]
    fn transactions_roundtrip_through_the_file() {
        let (storage, _dir) = temp_storage();
        let original = vec![
            test_transaction("t1", "Morning coffee"),
            test_transaction("t2", "Bus ticket"),
        ];
        storage.save_transactions(&original).unwrap();
        assert_eq!(storage.load_transactions().unwrap(), original);
    }

    #[test]
    fn save_replaces_the_previous_record() {
        let (storage, _dir) = temp_storage();
        storage
            .save_transactions(&[test_transaction("t1", "Old")])
            .unwrap();
        storage
            .save_transactions(&[test_transaction("t2", "New")])
            .unwrap();
        let loaded = storage.load_transactions().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "New");
    }

    #[test]
    fn settings_roundtrip_through_the_file() {
        let (storage, _dir) = temp_storage();
        let settings = Settings {
            rates: Rates {
                usd: 0.0007,
                gbp: 0.0005,
            },
            budget_cap: Some(250_000.0),
        };
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings().unwrap(), Some(settings));
    }

    #[test]
    fn records_live_under_distinct_keys() {
        let (storage, dir) = temp_storage();
        storage
            .save_transactions(&[test_transaction("t1", "Coffee")])
            .unwrap();
        storage.save_settings(&Settings::default()).unwrap();
        assert!(dir.path().join(TRANSACTIONS_FILE).exists());
        assert!(dir.path().join(SETTINGS_FILE).exists());
    }

    #[test]
    fn no_tmp_file_remains_after_a_save() {
        let (storage, dir) = temp_storage();
        storage
            .save_transactions(&[test_transaction("t1", "Coffee")])
            .unwrap();
        assert!(!dir.path().join("transactions.json.tmp").exists());
    }

    #[test]
    fn clear_removes_both_files() {
        let (storage, dir) = temp_storage();
        storage
            .save_transactions(&[test_transaction("t1", "Coffee")])
            .unwrap();
        storage.save_settings(&Settings::default()).unwrap();
        storage.clear().unwrap();
        assert!(!dir.path().join(TRANSACTIONS_FILE).exists());
        assert!(!dir.path().join(SETTINGS_FILE).exists());
        assert!(storage.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn clear_on_an_empty_directory_is_ok() {
        let (storage, _dir) = temp_storage();
        storage.clear().unwrap();
    }

    #[test]
    fn corrupt_json_surfaces_a_serialization_error() {
        let (storage, dir) = temp_storage();
        fs::write(dir.path().join(TRANSACTIONS_FILE), "not json").unwrap();
        let err = storage.load_transactions().unwrap_err();
        assert!(matches!(err, SpendbookError::Serialization(_)));
    }

    #[test]
    fn default_dir_returns_path() {
        // Just verify it doesn't error on supported platforms.
        let dir = FileStorage::default_dir();
        assert!(dir.is_ok());
    }
}
