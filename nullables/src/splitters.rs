//! Nullable splitter store.

use crate::lock;
use paysplit_store::{SplitterObject, SplitterStore, StoreError};
use paysplit_types::SplitterId;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory splitter store.
#[derive(Default)]
pub struct NullSplitterStore {
    splitters: Mutex<BTreeMap<SplitterId, SplitterObject>>,
    next_id: Mutex<u64>,
    fail_writes: AtomicBool,
}

impl NullSplitterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put_splitter` and `delete_splitter` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        lock(&self.splitters).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("splitter writes disabled".into()));
        }
        Ok(())
    }
}

impl SplitterStore for NullSplitterStore {
    fn get_splitter(&self, id: &SplitterId) -> Result<SplitterObject, StoreError> {
        lock(&self.splitters)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_splitter(&self, splitter: &SplitterObject) -> Result<(), StoreError> {
        self.check_writable()?;
        lock(&self.splitters).insert(splitter.id, splitter.clone());
        let mut next = lock(&self.next_id);
        *next = (*next).max(splitter.id.instance() + 1);
        Ok(())
    }

    fn delete_splitter(&self, id: &SplitterId) -> Result<(), StoreError> {
        self.check_writable()?;
        lock(&self.splitters)
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn splitter_exists(&self, id: &SplitterId) -> Result<bool, StoreError> {
        Ok(lock(&self.splitters).contains_key(id))
    }

    fn next_splitter_id(&self) -> Result<SplitterId, StoreError> {
        Ok(SplitterId::new(*lock(&self.next_id)))
    }

    fn iter_splitters(&self) -> Result<Vec<SplitterObject>, StoreError> {
        Ok(lock(&self.splitters).values().cloned().collect())
    }
}
