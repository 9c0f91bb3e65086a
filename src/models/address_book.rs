//! Address book: the keyed collection of contact records.

use super::record::Record;
use std::collections::HashMap;

/// Records keyed by contact name.
///
/// Listing follows first-insertion order. Adding a record under an existing
/// name replaces it in place (last write wins) without moving it.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, overwriting any existing entry.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate records in listing order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Render up to the first `n` records, one per line.
    pub fn list_first(&self, n: usize) -> String {
        self.records()
            .take(n)
            .map(|record| format!("{}\n", record.render()))
            .collect()
    }
}
