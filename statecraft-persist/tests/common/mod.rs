//! Shared fixtures: a project-assignment entity type and canned
//! principals.

use statecraft_entity::EntityModel;
use statecraft_rules::{
    AuthorizationAction, AuthorizationRule, AuthorizationTarget, OneOf, PrincipalProvider,
    StaticPrincipal,
};
use statecraft_types::PropertyDescriptor;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// An assignment of a resource to a project. Roles 1-3 are the known role
/// codes; writing the role requires the ProjectManager role.
pub fn assignment_model() -> Arc<EntityModel> {
    let mut model = EntityModel::new(
        "assignment",
        vec![
            PropertyDescriptor::relation("project_id"),
            PropertyDescriptor::text("project_name"),
            PropertyDescriptor::datetime("assigned"),
            PropertyDescriptor::number("role", 3),
        ],
    );
    model.add_validation_rule(Box::new(OneOf::new("role", [1, 2, 3])));
    model.add_authorization_rule(AuthorizationRule::require_role(
        AuthorizationAction::Write,
        AuthorizationTarget::property("role"),
        ["ProjectManager"],
    ));
    model.into_shared()
}

/// Same type, but creation itself is gated on ProjectManager.
pub fn gated_assignment_model() -> Arc<EntityModel> {
    let mut model = EntityModel::new(
        "assignment",
        vec![
            PropertyDescriptor::text("project_name"),
            PropertyDescriptor::number("role", 3),
        ],
    );
    model.add_authorization_rule(AuthorizationRule::require_role(
        AuthorizationAction::Create,
        AuthorizationTarget::Entity,
        ["ProjectManager"],
    ));
    model.into_shared()
}

pub fn manager() -> Arc<dyn PrincipalProvider> {
    Arc::new(StaticPrincipal::with_roles(["ProjectManager"]))
}

pub fn guest() -> Arc<dyn PrincipalProvider> {
    Arc::new(StaticPrincipal::with_roles(["Guest"]))
}

/// Opt-in log output for test runs: `RUST_LOG=debug cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
