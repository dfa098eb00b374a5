//! # Record Collection
//!
//! [`RecordStore`] is the synchronous collection behind every
//! [`StoreActor`](crate::StoreActor). It keeps records in insertion order,
//! enforces key uniqueness and counts successful mutations in a revision
//! number so readers can tell whether something they derived earlier is
//! out of date.
//!
//! The collection has no interior mutability and no locking. Exclusive
//! ownership is what keeps it consistent: in production the actor task owns
//! it, in tests a plain `let mut` does.

use crate::error::StoreError;
use crate::record::Record;
use indexmap::IndexMap;

/// A point-in-time copy of (part of) the store, tagged with the revision it was taken at.
#[derive(Debug, Clone)]
pub struct Snapshot<R> {
    pub revision: u64,
    pub records: Vec<R>,
}

impl<R> Snapshot<R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Insertion-ordered, key-unique collection of records.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: IndexMap<R::Key, R>,
    revision: u64,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            revision: 0,
        }
    }

    /// Builds a store from initial records, in order.
    ///
    /// Seeding goes through [`RecordStore::insert`], so a duplicate key in
    /// `records` is an error rather than a silent overwrite. Seeding leaves the
    /// revision at zero.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        store.revision = 0;
        Ok(store)
    }

    /// Number of successful mutations since the store was built.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &R::Key) -> Option<&R> {
        self.records.get(key)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// Appends a record. Fails without touching the store if the key is taken
    /// or the record's own validation rejects it.
    pub fn insert(&mut self, record: R) -> Result<R::Key, StoreError> {
        if self.contains(record.key()) {
            return Err(StoreError::DuplicateKey(record.key().to_string()));
        }
        record.validate().map_err(StoreError::record)?;

        let key = record.key().clone();
        self.records.insert(key.clone(), record);
        self.revision += 1;
        Ok(key)
    }

    /// Applies a patch to the record with `key` and returns the updated record.
    pub fn patch(&mut self, key: &R::Key, patch: R::Patch) -> Result<R, StoreError> {
        let slot = self
            .records
            .get_mut(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        let mut updated = slot.clone();
        updated.apply(patch).map_err(StoreError::record)?;
        *slot = updated.clone();
        self.revision += 1;
        Ok(updated)
    }

    /// Removes the record with `key`, keeping the relative order of the rest.
    pub fn remove(&mut self, key: &R::Key) -> Result<R, StoreError> {
        let removed = self
            .records
            .shift_remove(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        self.revision += 1;
        Ok(removed)
    }

    /// Records matching `query`, in store order.
    pub fn select(&self, query: &R::Query) -> Vec<R> {
        self.records
            .values()
            .filter(|record| record.matches(query))
            .cloned()
            .collect()
    }

    /// Copies the matching records (all of them when `query` is `None`).
    pub fn snapshot(&self, query: Option<&R::Query>) -> Snapshot<R> {
        let records = match query {
            Some(query) => self.select(query),
            None => self.records.values().cloned().collect(),
        };
        Snapshot {
            revision: self.revision,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        seats: u32,
    }

    #[derive(Debug)]
    struct SetSeats(u32);

    #[derive(Debug, thiserror::Error)]
    #[error("seats must be positive")]
    struct NoSeats;

    impl Record for Ticket {
        type Key = String;
        type Patch = SetSeats;
        type Query = u32;
        type Error = NoSeats;

        fn key(&self) -> &String {
            &self.id
        }

        fn apply(&mut self, patch: SetSeats) -> Result<(), NoSeats> {
            // Mutate first so a rejected patch would be visible if the store
            // committed it anyway.
            self.seats = patch.0;
            if patch.0 == 0 {
                return Err(NoSeats);
            }
            Ok(())
        }

        fn matches(&self, min_seats: &u32) -> bool {
            self.seats >= *min_seats
        }
    }

    fn ticket(id: &str, seats: u32) -> Ticket {
        Ticket {
            id: id.to_string(),
            seats,
        }
    }

    #[test]
    fn test_insert_keeps_order_and_bumps_revision() {
        let mut store = RecordStore::new();
        store.insert(ticket("b", 1)).unwrap();
        store.insert(ticket("a", 2)).unwrap();
        store.insert(ticket("c", 3)).unwrap();

        let keys: Vec<_> = store.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_duplicate_insert_leaves_store_unchanged() {
        let mut store = RecordStore::with_records([ticket("a", 1)]).unwrap();
        let err = store.insert(ticket("a", 9)).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateKey(ref k) if k == "a"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&"a".to_string()).unwrap().seats, 1);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_seeding_rejects_duplicates() {
        let result = RecordStore::with_records([ticket("a", 1), ticket("a", 2)]);
        assert!(matches!(result, Err(StoreError::DuplicateKey(_))));
    }

    #[test]
    fn test_failed_patch_is_not_committed() {
        let mut store = RecordStore::with_records([ticket("a", 4)]).unwrap();
        let err = store.patch(&"a".to_string(), SetSeats(0)).unwrap_err();

        assert!(matches!(err, StoreError::Record(_)));
        assert_eq!(store.get(&"a".to_string()).unwrap().seats, 4);
        assert_eq!(store.revision(), 0);

        let updated = store.patch(&"a".to_string(), SetSeats(2)).unwrap();
        assert_eq!(updated.seats, 2);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut store: RecordStore<Ticket> = RecordStore::new();
        let err = store.remove(&"nope".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref k) if k == "nope"));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut store =
            RecordStore::with_records([ticket("a", 1), ticket("b", 2), ticket("c", 3)]).unwrap();
        store.remove(&"b".to_string()).unwrap();

        let keys: Vec<_> = store.iter().map(|t| t.id.clone()).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_snapshot_with_and_without_query() {
        let store =
            RecordStore::with_records([ticket("a", 1), ticket("b", 5), ticket("c", 3)]).unwrap();

        let all = store.snapshot(None);
        assert_eq!(all.len(), 3);

        let big = store.snapshot(Some(&3));
        let keys: Vec<_> = big.records.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(keys, ["b", "c"]);
        assert_eq!(big.revision, 0);
    }
}
