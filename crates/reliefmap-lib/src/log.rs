//! Append-only record collections.
//!
//! Alerts, reports and volunteer sign-ups share this container: records can
//! be appended and read back in insertion order, never modified or removed.

use std::sync::Arc;

use crate::ids::{IdGenerator, RecordId};

/// Records that carry a store-assigned id.
pub trait Identified {
    fn id(&self) -> RecordId;
}

/// Insertion-ordered, append-only collection.
#[derive(Debug)]
pub struct AppendLog<T> {
    entries: Vec<T>,
    pub(crate) ids: Arc<IdGenerator>,
}

impl<T: Identified> AppendLog<T> {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            entries: Vec::new(),
            ids,
        }
    }

    /// Build a log from existing records, reserving their ids.
    pub fn with_entries(ids: Arc<IdGenerator>, entries: Vec<T>) -> Self {
        for entry in &entries {
            ids.observe(entry.id());
        }
        Self { entries, ids }
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }
}
