//! The managed entity: lifecycle flags, governed accessors, and the
//! broken-rules report.

use crate::{EntityError, EntityModel, EntityResult, PropertyStore};
use serde_json::{Map, Value};
use statecraft_rules::{
    AuthorizationAction, AuthorizationTarget, BrokenRulesCollection, PrincipalProvider,
};
use statecraft_types::{ChildId, ChildKey, ChildRecord, ConcurrencyToken, ParentId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A business entity whose fields are governed state: reads and writes pass
/// through authorization and change tracking, and every mutation
/// re-evaluates the type's validation rules.
///
/// Lives as a child of a parent aggregate. Construct through the lifecycle
/// controller's factory operations; the factories bind the instance to its
/// shared [`EntityModel`] and to the session principal.
///
/// Not safe for concurrent mutation — an instance models a single logical
/// edit session (and the cached read verdicts make it deliberately
/// `!Sync`).
pub struct ManagedEntity {
    model: Arc<EntityModel>,
    key: ChildKey,
    store: PropertyStore,
    broken: BrokenRulesCollection,
    is_new: bool,
    is_deleted: bool,
    token: Option<ConcurrencyToken>,
    principal: Arc<dyn PrincipalProvider>,
}

impl ManagedEntity {
    /// Factory for a brand-new child of `parent_id`.
    ///
    /// Gated by the entity-level `Create` authorization rule. `init_fields`
    /// are system-assigned defaults, not user input: they are applied
    /// through the trusted write path and must all be declared by the
    /// model. Validation runs once before the entity is handed out.
    pub fn new_child(
        model: Arc<EntityModel>,
        parent_id: ParentId,
        init_fields: &Map<String, Value>,
        principal: Arc<dyn PrincipalProvider>,
    ) -> EntityResult<Self> {
        if !model.rules().authorize(
            AuthorizationAction::Create,
            &AuthorizationTarget::Entity,
            principal.as_ref(),
        ) {
            return Err(EntityError::AuthorizationDenied {
                action: AuthorizationAction::Create,
                target: "entity".into(),
            });
        }

        let key = ChildKey::new(parent_id, ChildId::new());
        let mut store = PropertyStore::new(model.clone());
        for (name, value) in init_fields {
            let descriptor = model
                .descriptor(name)
                .ok_or_else(|| EntityError::UnknownProperty(name.clone()))?;
            store.load(descriptor, value.clone());
        }

        let broken = model.rules().evaluate(&store);
        debug!(entity = model.type_name(), %key, "created new child");
        Ok(Self {
            model,
            key,
            store,
            broken,
            is_new: true,
            is_deleted: false,
            token: None,
            principal,
        })
    }

    /// Factory for a child fetched from storage.
    ///
    /// Loading is trusted, not user mutation: all record fields are applied
    /// through the trusted write path with no authorization checks,
    /// whatever rules the model carries. Fields the model does not declare
    /// are skipped.
    pub fn load_child(
        model: Arc<EntityModel>,
        record: ChildRecord,
        principal: Arc<dyn PrincipalProvider>,
    ) -> Self {
        let key = record.key();
        let mut store = PropertyStore::new(model.clone());
        for (name, value) in &record.fields {
            match model.descriptor(name) {
                Some(descriptor) => store.load(descriptor, value.clone()),
                None => {
                    warn!(
                        entity = model.type_name(),
                        %key,
                        field = name.as_str(),
                        "fetched record carries undeclared field, skipping"
                    );
                }
            }
        }

        let broken = model.rules().evaluate(&store);
        debug!(entity = model.type_name(), %key, "loaded child from record");
        Self {
            model,
            key,
            store,
            broken,
            is_new: false,
            is_deleted: false,
            token: Some(record.token),
            principal,
        }
    }

    /// The only user-facing mutation path.
    ///
    /// Checks lifecycle state, then write authorization for the property,
    /// then updates the store and re-evaluates all validation rules. On any
    /// failure the store is left untouched.
    pub fn set_field(&mut self, property: &str, value: Value) -> EntityResult<()> {
        if self.is_deleted {
            return Err(EntityError::InvalidState(format!(
                "cannot modify {self}: marked for deletion"
            )));
        }
        let model = self.model.clone();
        let descriptor = model
            .descriptor(property)
            .ok_or_else(|| EntityError::UnknownProperty(property.to_string()))?;

        let target = AuthorizationTarget::property(property);
        if !model
            .rules()
            .authorize(AuthorizationAction::Write, &target, self.principal.as_ref())
        {
            return Err(EntityError::AuthorizationDenied {
                action: AuthorizationAction::Write,
                target: property.to_string(),
            });
        }

        self.store.set(descriptor, value);
        self.broken = model.rules().evaluate(&self.store);
        Ok(())
    }

    /// Governed read: current value, or the registered default when the
    /// property was never set — or when a `Read` authorization rule denies
    /// the principal (a suppressed read, not an error). The verdict is
    /// cached per property for the instance's lifetime.
    #[must_use]
    pub fn get_field(&self, property: &str) -> Value {
        let Some(descriptor) = self.model.descriptor(property) else {
            warn!(
                entity = self.model.type_name(),
                field = property,
                "read of undeclared property"
            );
            return Value::Null;
        };

        let allowed = self.store.read_allowed(property, || {
            self.model.rules().authorize(
                AuthorizationAction::Read,
                &AuthorizationTarget::property(property),
                self.principal.as_ref(),
            )
        });
        if allowed {
            self.store.get(property)
        } else {
            descriptor.default.clone()
        }
    }

    /// True when no validation rules are broken.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.broken.is_empty()
    }

    /// True if any property has been set since load/creation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// The currently-failing rules.
    #[must_use]
    pub fn broken_rules(&self) -> &BrokenRulesCollection {
        &self.broken
    }

    /// True until the first successful insert.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// True once marked for deletion; terminal and irreversible.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// The entity's composite identity.
    #[must_use]
    pub fn key(&self) -> ChildKey {
        self.key
    }

    /// The parent aggregate this child belongs to.
    #[must_use]
    pub fn parent_id(&self) -> ParentId {
        self.key.parent
    }

    /// The child's own identifier (provisional until inserted).
    #[must_use]
    pub fn child_id(&self) -> ChildId {
        self.key.child
    }

    /// The current concurrency token, if the entity has been persisted.
    #[must_use]
    pub fn token(&self) -> Option<&ConcurrencyToken> {
        self.token.as_ref()
    }

    /// The shared model this instance is bound to.
    #[must_use]
    pub fn model(&self) -> &Arc<EntityModel> {
        &self.model
    }

    /// Marks the entity for deletion. The entity becomes inert to further
    /// `set_field` calls; physical removal happens on the parent's save
    /// cycle.
    pub fn mark_for_deletion(&mut self) {
        self.is_deleted = true;
        debug!(entity = self.model.type_name(), key = %self.key, "marked for deletion");
    }

    /// Field map for the persistence backend: every declared property at
    /// its current (or default) value.
    #[must_use]
    pub fn field_snapshot(&self) -> Map<String, Value> {
        self.store.snapshot()
    }

    /// Applies the outcome of a successful insert: the backend-assigned
    /// identity and token. Invoked by the lifecycle controller only.
    pub fn apply_inserted(&mut self, child_id: ChildId, token: ConcurrencyToken) {
        self.key.child = child_id;
        self.token = Some(token);
        self.is_new = false;
        self.store.mark_clean();
    }

    /// Applies the outcome of a successful update: the replacement token.
    /// Invoked by the lifecycle controller only.
    pub fn apply_saved(&mut self, token: ConcurrencyToken) {
        self.token = Some(token);
        self.store.mark_clean();
    }
}

impl fmt::Debug for ManagedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedEntity")
            .field("type_name", &self.model.type_name())
            .field("key", &self.key)
            .field("is_new", &self.is_new)
            .field("is_deleted", &self.is_deleted)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ManagedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.model.type_name(), self.key)
    }
}
