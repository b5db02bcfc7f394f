//! The child lifecycle controller: factories plus the CRUD protocol.

use crate::{DataAccess, PersistError, PersistResult};
use serde_json::{Map, Value};
use statecraft_entity::{EntityModel, ManagedEntity};
use statecraft_rules::PrincipalProvider;
use statecraft_types::{ChildRecord, ConcurrencyToken, ParentId};
use std::sync::Arc;
use tracing::debug;

/// Mediates between managed entities and a [`DataAccess`] backend for one
/// edit session.
///
/// The controller is the only sanctioned way to obtain an entity: `create`
/// for a brand-new child, `fetch`/`fetch_all` for stored ones. Persistence
/// operations check the entity's lifecycle preconditions before any
/// backend call — a violation fails with
/// [`PersistError::InvalidState`] and the backend is never invoked.
///
/// Each call is a single atomic request/response: either the backend
/// commit happens and the entity adopts the returned token, or the entity
/// state is unchanged.
pub struct ChildLifecycleController<D: DataAccess> {
    data: D,
    principal: Arc<dyn PrincipalProvider>,
}

impl<D: DataAccess> ChildLifecycleController<D> {
    /// Creates a controller over a backend, bound to the session principal.
    pub fn new(data: D, principal: Arc<dyn PrincipalProvider>) -> Self {
        Self { data, principal }
    }

    /// The underlying backend.
    pub fn data_access(&self) -> &D {
        &self.data
    }

    /// Constructs a new child of `parent_id` with the given system-assigned
    /// defaults. No I/O happens here — the child is persisted when the
    /// parent's save cycle reaches it.
    pub fn create(
        &self,
        model: &Arc<EntityModel>,
        parent_id: ParentId,
        defaults: &Map<String, Value>,
    ) -> PersistResult<ManagedEntity> {
        let entity =
            ManagedEntity::new_child(model.clone(), parent_id, defaults, self.principal.clone())?;
        debug!(key = %entity.key(), "created child");
        Ok(entity)
    }

    /// Materializes a child from a record the backend already produced.
    /// The controller does not itself query.
    pub fn fetch(&self, model: &Arc<EntityModel>, record: ChildRecord) -> ManagedEntity {
        ManagedEntity::load_child(model.clone(), record, self.principal.clone())
    }

    /// Materializes every stored child of a parent aggregate.
    pub fn fetch_all(
        &self,
        model: &Arc<EntityModel>,
        parent_id: ParentId,
    ) -> PersistResult<Vec<ManagedEntity>> {
        let records = self.data.fetch_all(parent_id)?;
        debug!(%parent_id, count = records.len(), "fetched children");
        Ok(records
            .into_iter()
            .map(|record| self.fetch(model, record))
            .collect())
    }

    /// Persists a new child. Precondition: valid and new.
    ///
    /// On success the entity adopts the backend-assigned identity and
    /// token and transitions out of the new state.
    pub fn insert(&self, entity: &mut ManagedEntity) -> PersistResult<ConcurrencyToken> {
        if entity.is_deleted() {
            return Err(PersistError::InvalidState(format!(
                "cannot insert {entity}: marked for deletion"
            )));
        }
        if !entity.is_new() {
            return Err(PersistError::InvalidState(format!(
                "cannot insert {entity}: already persisted"
            )));
        }
        self.require_valid(entity, "insert")?;

        let (child_id, token) = self
            .data
            .insert(entity.parent_id(), &entity.field_snapshot())?;
        entity.apply_inserted(child_id, token.clone());
        debug!(key = %entity.key(), "inserted child");
        Ok(token)
    }

    /// Persists changes to an existing child, presenting the current
    /// token. Precondition: valid, not new, not deleted, token present.
    ///
    /// A stale token surfaces as
    /// [`PersistError::ConcurrencyConflict`] with the entity unchanged;
    /// resolution belongs to the caller.
    pub fn update(&self, entity: &mut ManagedEntity) -> PersistResult<ConcurrencyToken> {
        if entity.is_new() {
            return Err(PersistError::InvalidState(format!(
                "cannot update {entity}: never persisted"
            )));
        }
        if entity.is_deleted() {
            return Err(PersistError::InvalidState(format!(
                "cannot update {entity}: marked for deletion"
            )));
        }
        self.require_valid(entity, "update")?;
        let token = entity.token().cloned().ok_or_else(|| {
            PersistError::InvalidState(format!("cannot update {entity}: no concurrency token"))
        })?;

        let new_token = self
            .data
            .update(entity.key(), &entity.field_snapshot(), &token)?;
        entity.apply_saved(new_token.clone());
        debug!(key = %entity.key(), "updated child");
        Ok(new_token)
    }

    /// Removes a child marked for deletion, keyed by identity.
    /// Precondition: marked for deletion.
    ///
    /// A child that was created and discarded within the session was never
    /// persisted; nothing is sent to the backend for it.
    pub fn delete(&self, entity: &ManagedEntity) -> PersistResult<()> {
        if !entity.is_deleted() {
            return Err(PersistError::InvalidState(format!(
                "cannot delete {entity}: not marked for deletion"
            )));
        }
        if entity.is_new() {
            debug!(key = %entity.key(), "discarding never-persisted child");
            return Ok(());
        }

        self.data.delete(entity.key())?;
        debug!(key = %entity.key(), "deleted child");
        Ok(())
    }

    fn require_valid(&self, entity: &ManagedEntity, operation: &str) -> PersistResult<()> {
        if entity.is_valid() {
            Ok(())
        } else {
            Err(PersistError::InvalidState(format!(
                "cannot {operation} {entity}: validation rules are broken: {}",
                entity.broken_rules()
            )))
        }
    }
}
