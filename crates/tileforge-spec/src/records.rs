//! Creation record store contract.
//!
//! The engine itself holds no persistence; selected runs are saved through
//! this collaborator interface, keyed by an opaque caller identity. The
//! in-memory implementation backs tests and the CLI demo.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A saved creation as returned from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRecord {
    /// Caller-chosen title.
    pub title: String,
    /// Optional encoded thumbnail (JPEG bytes).
    pub thumbnail: Option<Vec<u8>>,
    /// Whether the run was generated with Creative Freedom-B on.
    pub creative_freedom: bool,
    /// Caller-asserted usability flag. The sole gate for the usable-only view.
    pub usable: bool,
    /// Canonical settings summary for the saved run.
    pub settings_summary: String,
    /// Save time as unix milliseconds.
    pub timestamp: i64,
}

/// A record as submitted for saving. The store stamps the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub title: String,
    pub thumbnail: Option<Vec<u8>>,
    pub creative_freedom: bool,
    pub usable: bool,
    pub settings_summary: String,
}

/// Store for saved creations, keyed by caller identity.
///
/// The store imposes no intrinsic ordering; callers sort by timestamp when
/// they need recency. Implementations must reject empty titles.
pub trait RecordStore {
    /// Persist a record for a caller.
    fn save(&self, caller: &str, record: NewRecord) -> Result<(), RecordError>;

    /// All records saved by one caller, in insertion order.
    fn records_for(&self, caller: &str) -> Result<Vec<CreationRecord>, RecordError>;

    /// All records across every caller. Admin-equivalent capability.
    fn all_records(&self) -> Result<Vec<CreationRecord>, RecordError>;

    /// The caller's records with `usable == true`, preserving their
    /// relative order.
    fn usable_records_for(&self, caller: &str) -> Result<Vec<CreationRecord>, RecordError> {
        let mut records = self.records_for(caller)?;
        records.retain(|r| r.usable);
        Ok(records)
    }
}

/// Gate applied by the interactive save flow before a record reaches the
/// store: a title must be present and the creation must be marked usable.
///
/// The store itself accepts either flag (existing records may be
/// non-usable and simply stay out of the filtered view); this gate is the
/// save-time policy. A rejection leaves both the store and the caller's
/// in-memory run untouched.
pub fn submit_creation(
    store: &dyn RecordStore,
    caller: &str,
    record: NewRecord,
) -> Result<(), RecordError> {
    if record.title.trim().is_empty() {
        return Err(RecordError::EmptyTitle);
    }
    if !record.usable {
        return Err(RecordError::NotUsable);
    }
    store.save(caller, record)
}

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<HashMap<String, Vec<CreationRecord>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<CreationRecord>>>, RecordError> {
        self.records
            .lock()
            .map_err(|_| RecordError::Backend("record store lock poisoned".to_string()))
    }
}

impl RecordStore for MemoryRecordStore {
    fn save(&self, caller: &str, record: NewRecord) -> Result<(), RecordError> {
        if record.title.trim().is_empty() {
            return Err(RecordError::EmptyTitle);
        }

        let saved = CreationRecord {
            title: record.title,
            thumbnail: record.thumbnail,
            creative_freedom: record.creative_freedom,
            usable: record.usable,
            settings_summary: record.settings_summary,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        self.lock()?
            .entry(caller.to_string())
            .or_default()
            .push(saved);
        Ok(())
    }

    fn records_for(&self, caller: &str) -> Result<Vec<CreationRecord>, RecordError> {
        Ok(self.lock()?.get(caller).cloned().unwrap_or_default())
    }

    fn all_records(&self) -> Result<Vec<CreationRecord>, RecordError> {
        Ok(self.lock()?.values().flatten().cloned().collect())
    }
}
