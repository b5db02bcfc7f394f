//! Raw child records as handed over by a data-access backend.

use crate::{ChildId, ChildKey, ConcurrencyToken, ParentId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One fetched row for a child entity, before it is materialized into a
/// managed entity.
///
/// The field map is keyed by property name; values are whatever the backend
/// stored. Fields the entity model does not declare are skipped at load
/// time, so records stay forward-compatible with schema additions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildRecord {
    pub parent_id: ParentId,
    pub child_id: ChildId,
    pub fields: Map<String, Value>,
    pub token: ConcurrencyToken,
}

impl ChildRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        parent_id: ParentId,
        child_id: ChildId,
        fields: Map<String, Value>,
        token: ConcurrencyToken,
    ) -> Self {
        Self {
            parent_id,
            child_id,
            fields,
            token,
        }
    }

    /// The composite identity of this row.
    #[must_use]
    pub fn key(&self) -> ChildKey {
        ChildKey::new(self.parent_id, self.child_id)
    }
}
