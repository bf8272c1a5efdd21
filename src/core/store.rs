// webpdrop/src/core/store.rs
use indexmap::IndexMap;

use super::ConversionResult;

/// Converted bytes plus the size metadata shown on the preview card.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub data: Vec<u8>,
    pub original_size: u64,
    pub converted_size: u64,
}

/// Insertion-ordered mapping from output filename to converted content.
///
/// Keys are unique. Inserting an existing key replaces the value without
/// moving the entry; removal preserves the order of the remaining entries.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: IndexMap<String, StoredEntry>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a finished conversion. A result that lands on an existing key
    /// (two in-flight conversions that mapped to the same output name)
    /// overwrites the earlier one; the returned value is the displaced entry.
    pub fn insert(&mut self, result: ConversionResult) -> Option<StoredEntry> {
        let entry = StoredEntry {
            data: result.data,
            original_size: result.original_size,
            converted_size: result.converted_size,
        };
        self.entries.insert(result.output_name, entry)
    }

    pub fn remove(&mut self, name: &str) -> Option<StoredEntry> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StoredEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StoredEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
