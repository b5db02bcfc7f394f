//! In-memory reference backend with real token versioning.

use crate::{DataAccess, PersistError, PersistResult};
use serde_json::{Map, Value};
use statecraft_types::{ChildId, ChildKey, ChildRecord, ConcurrencyToken, ParentId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct StoredRow {
    fields: Map<String, Value>,
    version: u64,
}

/// A [`DataAccess`] backend keeping rows in memory.
///
/// Each row carries a monotonically increasing version, encoded big-endian
/// into the concurrency token. Updates compare the presented token against
/// the stored version byte-for-byte and reject mismatches without touching
/// the row. Shareable across controllers (wrap in `Arc`), which is exactly
/// what concurrent-edit tests need.
#[derive(Debug, Default)]
pub struct InMemoryDataAccess {
    rows: Mutex<HashMap<ChildKey, StoredRow>>,
}

impl InMemoryDataAccess {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, across all parents.
    pub fn row_count(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    /// Whether a row exists for the given key.
    pub fn contains(&self, key: ChildKey) -> bool {
        self.rows
            .lock()
            .map(|rows| rows.contains_key(&key))
            .unwrap_or(false)
    }

    fn lock(&self) -> PersistResult<MutexGuard<'_, HashMap<ChildKey, StoredRow>>> {
        self.rows
            .lock()
            .map_err(|_| PersistError::Backend("row store lock poisoned".into()))
    }

    fn token_for(version: u64) -> ConcurrencyToken {
        ConcurrencyToken::from_bytes(version.to_be_bytes().to_vec())
    }
}

impl DataAccess for InMemoryDataAccess {
    fn insert(
        &self,
        parent_id: ParentId,
        fields: &Map<String, Value>,
    ) -> PersistResult<(ChildId, ConcurrencyToken)> {
        let mut rows = self.lock()?;
        let child_id = ChildId::new();
        let key = ChildKey::new(parent_id, child_id);
        rows.insert(
            key,
            StoredRow {
                fields: fields.clone(),
                version: 1,
            },
        );
        Ok((child_id, Self::token_for(1)))
    }

    fn update(
        &self,
        key: ChildKey,
        fields: &Map<String, Value>,
        token: &ConcurrencyToken,
    ) -> PersistResult<ConcurrencyToken> {
        let mut rows = self.lock()?;
        let row = rows.get_mut(&key).ok_or(PersistError::NotFound(key))?;
        if *token != Self::token_for(row.version) {
            return Err(PersistError::ConcurrencyConflict(key));
        }
        row.fields = fields.clone();
        row.version += 1;
        Ok(Self::token_for(row.version))
    }

    fn delete(&self, key: ChildKey) -> PersistResult<()> {
        let mut rows = self.lock()?;
        rows.remove(&key)
            .map(|_| ())
            .ok_or(PersistError::NotFound(key))
    }

    fn fetch_all(&self, parent_id: ParentId) -> PersistResult<Vec<ChildRecord>> {
        let rows = self.lock()?;
        let mut records: Vec<ChildRecord> = rows
            .iter()
            .filter(|(key, _)| key.parent == parent_id)
            .map(|(key, row)| {
                ChildRecord::new(
                    key.parent,
                    key.child,
                    row.fields.clone(),
                    Self::token_for(row.version),
                )
            })
            .collect();
        // v7 child ids are time-ordered, so this is insertion order
        records.sort_by_key(|r| r.child_id.as_uuid());
        Ok(records)
    }
}
