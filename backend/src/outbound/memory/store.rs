//! Mutex-guarded record collection shared by the in-memory repositories.

use std::sync::{Mutex, MutexGuard};

use crate::domain::RecordId;
use crate::domain::ports::StorageError;

/// Record type the store can hold.
pub trait StoredRecord: Clone + Send {
    /// Validated fields awaiting an identifier.
    type New: Send;
    /// Validated partial update.
    type Patch: Send;

    /// Identifier the record was stored under.
    fn record_id(&self) -> RecordId;

    /// Build the stored record for `new` under `id`.
    fn materialise(new: Self::New, id: RecordId) -> Self;

    /// Merge `patch` into the record.
    fn merge(&mut self, patch: Self::Patch);
}

struct Records<T> {
    rows: Vec<T>,
    next_id: u64,
}

/// Insertion-ordered records with monotonically assigned identifiers.
///
/// Identifiers start at 1 and are never reused, even after deletion. Reads
/// return clones so callers cannot reach stored state. A poisoned lock is
/// reported as [`StorageError::Unavailable`].
pub struct RecordStore<T> {
    inner: Mutex<Records<T>>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<T> RecordStore<T> {
    fn starting_at(next_id: u64) -> Self {
        Self {
            inner: Mutex::new(Records {
                rows: Vec::new(),
                next_id,
            }),
        }
    }
}

impl<T: StoredRecord> RecordStore<T> {
    fn lock(&self) -> Result<MutexGuard<'_, Records<T>>, StorageError> {
        self.inner
            .lock()
            .map_err(|_| StorageError::unavailable("record store lock poisoned"))
    }

    fn position(rows: &[T], id: RecordId) -> Result<usize, StorageError> {
        rows.iter()
            .position(|row| row.record_id() == id)
            .ok_or(StorageError::NotFound)
    }

    /// Copy of every record in insertion order.
    pub fn all(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.lock()?.rows.clone())
    }

    /// Copy of the record stored under `id`.
    pub fn get(&self, id: RecordId) -> Result<T, StorageError> {
        let records = self.lock()?;
        let index = Self::position(&records.rows, id)?;
        Ok(records.rows[index].clone())
    }

    /// Assign the next identifier to `new` and store it.
    pub fn insert(&self, new: T::New) -> Result<T, StorageError> {
        let mut records = self.lock()?;
        let id = u32::try_from(records.next_id)
            .map(RecordId::new)
            .map_err(|_| StorageError::query("identifier space exhausted"))?;
        let record = T::materialise(new, id);
        records.rows.push(record.clone());
        records.next_id += 1;
        Ok(record)
    }

    /// Merge `patch` into the record stored under `id`.
    pub fn modify(&self, id: RecordId, patch: T::Patch) -> Result<T, StorageError> {
        let mut records = self.lock()?;
        let index = Self::position(&records.rows, id)?;
        let row = &mut records.rows[index];
        row.merge(patch);
        Ok(row.clone())
    }

    /// Delete the record stored under `id`.
    pub fn remove(&self, id: RecordId) -> Result<(), StorageError> {
        let mut records = self.lock()?;
        let index = Self::position(&records.rows, id)?;
        records.rows.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Identifier assignment, copy isolation and failure reporting.
    use std::sync::Arc;

    use super::*;
    use rstest::{fixture, rstest};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl StoredRecord for Note {
        type New = String;
        type Patch = String;

        fn record_id(&self) -> RecordId {
            self.id
        }

        fn materialise(new: String, id: RecordId) -> Self {
            Self { id, text: new }
        }

        fn merge(&mut self, patch: String) {
            self.text = patch;
        }
    }

    #[fixture]
    fn store() -> RecordStore<Note> {
        RecordStore::default()
    }

    #[rstest]
    fn identifiers_start_at_one_and_are_never_reused(store: RecordStore<Note>) {
        let first = store.insert("a".into()).expect("insert");
        let second = store.insert("b".into()).expect("insert");
        assert_eq!(first.id, RecordId::new(1));
        assert_eq!(second.id, RecordId::new(2));

        store.remove(second.id).expect("remove");
        let third = store.insert("c".into()).expect("insert");
        assert_eq!(third.id, RecordId::new(3));
    }

    #[rstest]
    fn reads_are_copies(store: RecordStore<Note>) {
        store.insert("original".into()).expect("insert");

        let mut listed = store.all().expect("list");
        listed[0].text = "mutated".into();
        listed.clear();

        let mut fetched = store.get(RecordId::new(1)).expect("get");
        fetched.text = "mutated".into();

        assert_eq!(store.get(RecordId::new(1)).expect("get").text, "original");
        assert_eq!(store.all().expect("list").len(), 1);
    }

    #[rstest]
    fn missing_ids_report_not_found(store: RecordStore<Note>) {
        let missing = RecordId::new(999);
        assert_eq!(store.get(missing), Err(StorageError::NotFound));
        assert_eq!(store.modify(missing, "x".into()), Err(StorageError::NotFound));
        assert_eq!(store.remove(missing), Err(StorageError::NotFound));
    }

    #[rstest]
    fn modify_merges_in_place(store: RecordStore<Note>) {
        let note = store.insert("draft".into()).expect("insert");
        let updated = store.modify(note.id, "final".into()).expect("modify");
        assert_eq!(updated.text, "final");
        assert_eq!(store.get(note.id).expect("get"), updated);
    }

    #[test]
    fn exhausted_identifier_space_is_a_query_error() {
        let store = RecordStore::<Note>::starting_at(u64::from(u32::MAX));
        let last = store.insert("last".into()).expect("insert");
        assert_eq!(last.id, RecordId::new(u32::MAX));

        let err = store.insert("overflow".into()).expect_err("exhausted");
        assert!(err.is_query());
    }

    #[test]
    fn poisoned_lock_is_reported_as_unavailable() {
        let store = Arc::new(RecordStore::<Note>::default());
        let poisoner = Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().expect("first lock");
            panic!("poison the store");
        })
        .join();
        assert!(joined.is_err());

        let err = store.all().expect_err("poisoned");
        assert!(err.is_unavailable());
    }

    #[test]
    fn concurrent_inserts_get_distinct_ids() {
        let store = Arc::new(RecordStore::<Note>::default());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert(format!("note {n}")).expect("insert").id)
            })
            .collect();
        let mut ids: Vec<u32> = handles
            .into_iter()
            .map(|h| h.join().expect("thread joins").get())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<u32>>());
    }
}
