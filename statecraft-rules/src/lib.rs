//! Validation and authorization rules for statecraft entities.
//!
//! Two rule families, registered per entity type and evaluated by
//! [`RuleEngine`]:
//! - [`ValidationRule`] — data-shape predicates over current field values,
//!   producing a [`BrokenRulesCollection`] report
//! - [`AuthorizationRule`] — role requirements bound to an action and a
//!   property (or the entity as a whole), composed deny-overrides-allow
//!
//! Splitting the two lets each be tested independently and composed per
//! property without a combinatorial rule explosion. Roles are sourced from
//! an injected [`PrincipalProvider`] capability; this crate never decides
//! who the current principal is.

mod authorization;
mod broken;
mod common;
mod engine;
mod principal;
mod validation;

pub use authorization::{AuthorizationAction, AuthorizationRule, AuthorizationTarget, RoleRequirement};
pub use broken::{BrokenRule, BrokenRulesCollection};
pub use common::{InRange, MaxLength, OneOf, Required};
pub use engine::RuleEngine;
pub use principal::{PrincipalProvider, StaticPrincipal};
pub use validation::{ValidationRule, ValueSource};
