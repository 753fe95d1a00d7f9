//! Autocomplete records of previously confirmed lookups.
//!
//! Each successful lookup is remembered as an `"id::name"` entry. The store
//! is append-only and deduplicated; persistence is the caller's concern
//! (the original web form kept the serialized store in local storage).

use serde::{Deserialize, Serialize};

/// Separator between the ID and name halves of a stored entry.
const ENTRY_SEPARATOR: &str = "::";

/// One confirmed tax-ID / company-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Unified business number.
    pub id: String,
    /// Registered company name.
    pub name: String,
}

impl CompanyRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Format as a storable `"id::name"` entry.
    pub fn to_entry(&self) -> String {
        format!("{}{ENTRY_SEPARATOR}{}", self.id, self.name)
    }

    /// Parse a stored entry. Splits on the first separator only, so names
    /// containing `::` survive.
    pub fn parse_entry(entry: &str) -> Option<Self> {
        let (id, name) = entry.split_once(ENTRY_SEPARATOR)?;
        Some(Self::new(id, name))
    }
}

/// Append-only, deduplicated list of confirmed records.
///
/// Serializes as a plain JSON array of entry strings, the shape the original
/// form kept under its local-storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    entries: Vec<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted entries.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Append a record. Returns `false` if an identical entry already exists.
    pub fn insert(&mut self, record: &CompanyRecord) -> bool {
        let entry = record.to_entry();
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Raw entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Company names for datalist-style suggestions, oldest first.
    /// Malformed entries are skipped.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(|e| e.split_once(ENTRY_SEPARATOR))
            .map(|(_, name)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything (the "delete stored data" action).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
