use std::collections::HashMap;
use std::collections::hash_map::Entry;

use voicepick_core::Entity;

use crate::record::{InventoryRecord, ProductName};

/// Ordered, read-only collection of inventory records.
///
/// Built once per session and never mutated afterwards, so it can be shared
/// across callers behind an `Arc` without locking. A normalised-name index
/// is built at construction; when the source contains duplicate names the
/// first row wins, matching a linear first-match scan.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    records: Vec<InventoryRecord>,
    index: HashMap<ProductName, usize>,
}

impl InventoryTable {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            match index.entry(record.id().clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
                Entry::Occupied(first) => {
                    tracing::warn!(
                        product = %record.product_name(),
                        first_row = *first.get(),
                        duplicate_row = pos,
                        "duplicate product name; lookups return the first row"
                    );
                }
            }
        }

        Self { records, index }
    }

    /// A table with no rows; every lookup is a miss.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-insensitive lookup by product name.
    ///
    /// `name` is trimmed and lower-cased before comparison. Blank names never
    /// match.
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryRecord> {
        let key = ProductName::normalize(name);
        if key.is_empty() {
            return None;
        }
        self.index.get(&key).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.iter()
    }
}

impl FromIterator<InventoryRecord> for InventoryTable {
    fn from_iter<I: IntoIterator<Item = InventoryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
