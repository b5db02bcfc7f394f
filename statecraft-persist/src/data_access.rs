//! The external data-access contract.

use crate::PersistResult;
use serde_json::{Map, Value};
use statecraft_types::{ChildId, ChildKey, ChildRecord, ConcurrencyToken, ParentId};
use std::sync::Arc;

/// The persistence backend a lifecycle controller delegates to.
///
/// Implementations own the persisted representation entirely: field
/// layout, token encoding, and how the stored version is compared against
/// a presented token. The contract this crate relies on:
///
/// - `insert` assigns the definitive child identity and the initial token.
/// - `update` compares the presented token against the stored version and
///   fails with [`PersistError::ConcurrencyConflict`] on mismatch, leaving
///   the row unchanged; on match it writes and returns a fresh token.
/// - `delete` is keyed by identity alone — lost-update protection is
///   waived for deletes.
///
/// [`PersistError::ConcurrencyConflict`]: crate::PersistError::ConcurrencyConflict
pub trait DataAccess: Send + Sync {
    /// Inserts a new child row, returning its assigned identity and token.
    fn insert(
        &self,
        parent_id: ParentId,
        fields: &Map<String, Value>,
    ) -> PersistResult<(ChildId, ConcurrencyToken)>;

    /// Overwrites an existing row if `token` matches the stored version;
    /// returns the replacement token.
    fn update(
        &self,
        key: ChildKey,
        fields: &Map<String, Value>,
        token: &ConcurrencyToken,
    ) -> PersistResult<ConcurrencyToken>;

    /// Removes a row by identity.
    fn delete(&self, key: ChildKey) -> PersistResult<()>;

    /// All stored rows for a parent aggregate.
    fn fetch_all(&self, parent_id: ParentId) -> PersistResult<Vec<ChildRecord>>;
}

impl<D: DataAccess + ?Sized> DataAccess for Arc<D> {
    fn insert(
        &self,
        parent_id: ParentId,
        fields: &Map<String, Value>,
    ) -> PersistResult<(ChildId, ConcurrencyToken)> {
        (**self).insert(parent_id, fields)
    }

    fn update(
        &self,
        key: ChildKey,
        fields: &Map<String, Value>,
        token: &ConcurrencyToken,
    ) -> PersistResult<ConcurrencyToken> {
        (**self).update(key, fields, token)
    }

    fn delete(&self, key: ChildKey) -> PersistResult<()> {
        (**self).delete(key)
    }

    fn fetch_all(&self, parent_id: ParentId) -> PersistResult<Vec<ChildRecord>> {
        (**self).fetch_all(parent_id)
    }
}
