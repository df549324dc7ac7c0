//! CSV-backed record store.
//!
//! The store owns a single flat file: a header row followed by one row per
//! logged entry, in append order. Appending reloads the full set and
//! rewrites the whole file through a temp file renamed into place, so a
//! successful append never leaves a torn file and a failed one leaves the
//! previous contents untouched.
//!
//! There is no locking. Two processes appending concurrently race and the
//! last rewrite wins; the contract is single-writer.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::StoreError;
use crate::record::{Record, HEADER};

use super::data_dir;

/// File name of the backing CSV under the data directory.
pub const DEFAULT_FILE_NAME: &str = "health_log.csv";

/// Durable, schema-stable persistence of the record history.
///
/// The path is an explicit constructor parameter so tests can point the
/// store at a temporary location.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// A store backed by the file at `path`. The file is not touched until
    /// [`ensure_initialized`](Self::ensure_initialized) or a write runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at `~/.config/healthlog/health_log.csv`, creating the
    /// file with its header if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the data directory or the file cannot be created.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|source| StoreError::WriteFailure {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            source,
        })?;
        let store = Self::new(dir.join(DEFAULT_FILE_NAME));
        store.ensure_initialized()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file containing only the column header when it
    /// does not exist. Idempotent: an existing file is never altered, so
    /// this is safe to call on every program start.
    ///
    /// # Errors
    /// Returns [`StoreError::WriteFailure`] if the parent directory or the
    /// file cannot be created.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.write_failure(source))?;
            }
        }
        self.write_all(&[])
    }

    /// Read the entire backing file into records, preserving file order.
    ///
    /// A file with a header and zero data rows yields an empty Vec, not an
    /// error.
    ///
    /// # Errors
    /// Returns [`StoreError::Unreadable`] if the file is missing, its header
    /// does not match the fixed schema, or any row fails to parse.
    pub fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        if !self.path.exists() {
            return Err(self.unreadable("file does not exist"));
        }

        let mut reader = ReaderBuilder::new()
            .from_path(&self.path)
            .map_err(|e| self.unreadable(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| self.unreadable(e.to_string()))?;
        if headers.iter().ne(HEADER) {
            let found = headers.iter().collect::<Vec<_>>().join(",");
            return Err(self.unreadable(format!(
                "header '{found}' does not match the expected schema '{}'",
                HEADER.join(",")
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row.map_err(|e| self.unreadable(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Append `record` as the final entry and rewrite the whole file.
    ///
    /// Whole-file rewrite on every append is a deliberate trade-off: the
    /// file is always fully well-formed after a successful call, and O(n)
    /// per append is immaterial at tens to low thousands of rows.
    ///
    /// # Errors
    /// Returns [`StoreError::Unreadable`] if the current contents cannot be
    /// loaded, or [`StoreError::WriteFailure`] if the rewrite fails.
    pub fn append(&self, record: Record) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// Rewrite the backing file as header + `records`, atomically: the new
    /// contents go to a temp file in the same directory, which is then
    /// renamed over the old one.
    fn write_all(&self, records: &[Record]) -> Result<(), StoreError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|source| self.write_failure(source))?;
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer
                .write_record(HEADER)
                .map_err(|e| self.write_failure(io::Error::other(e)))?;
            for record in records {
                writer
                    .serialize(record)
                    .map_err(|e| self.write_failure(io::Error::other(e)))?;
            }
            writer
                .flush()
                .map_err(|source| self.write_failure(source))?;
        }
        tmp.as_file_mut()
            .flush()
            .map_err(|source| self.write_failure(source))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_failure(e.error))?;
        Ok(())
    }

    fn unreadable(&self, reason: impl Into<String>) -> StoreError {
        StoreError::Unreadable {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn write_failure(&self, source: io::Error) -> StoreError {
        StoreError::WriteFailure {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, exercise: f64, water: f64, sleep: f64, calories: f64) -> Record {
        Record::new(
            date.parse::<NaiveDate>().unwrap(),
            exercise,
            water,
            sleep,
            calories,
        )
    }

    fn temp_store(dir: &tempfile::TempDir) -> LogStore {
        LogStore::new(dir.path().join("health_log.csv"))
    }

    #[test]
    fn initialize_creates_header_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_initialized().unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content.trim_end(),
            "date,exercise_minutes,water_liters,sleep_hours,calories"
        );
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn initialize_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_initialized().unwrap();
        store.append(record("2024-01-01", 30.0, 2.0, 7.5, 2100.0)).unwrap();

        store.ensure_initialized().unwrap();
        store.ensure_initialized().unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], record("2024-01-01", 30.0, 2.0, 7.5, 2100.0));
    }

    #[test]
    fn initialize_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("nested/deeper/health_log.csv"));
        store.ensure_initialized().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn append_grows_by_one_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_initialized().unwrap();

        let first = record("2024-01-01", 30.0, 2.0, 7.5, 2100.0);
        let second = record("2024-01-02", 45.0, 2.5, 8.0, 2200.0);
        store.append(first.clone()).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);

        store.append(second.clone()).unwrap();
        let records = store.load_all().unwrap();
        assert_eq!(records, vec![first, second]);
    }

    #[test]
    fn same_date_duplicates_are_retained() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_initialized().unwrap();

        store.append(record("2024-01-01", 30.0, 2.0, 7.5, 2100.0)).unwrap();
        store.append(record("2024-01-01", 10.0, 1.0, 6.0, 1800.0)).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { .. }));
    }

    #[test]
    fn load_fails_on_header_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        fs::write(
            store.path(),
            "day,exercise_minutes,water_liters,sleep_hours,calories\n",
        )
        .unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { .. }));
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn load_fails_on_non_numeric_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        fs::write(
            store.path(),
            "date,exercise_minutes,water_liters,sleep_hours,calories\n\
             2024-01-01,thirty,2.0,7.5,2100.0\n",
        )
        .unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { .. }));
    }

    #[test]
    fn values_survive_the_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        store.ensure_initialized().unwrap();

        let entry = record("2024-03-15", 32.25, 1.8333333333333333, 7.01, 2154.9);
        store.append(entry.clone()).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![entry]);
    }
}
