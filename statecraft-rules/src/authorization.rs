//! Authorization rules: role requirements bound to actions and targets.

use crate::PrincipalProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The guarded action an authorization rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationAction {
    /// Reading a property value.
    Read,
    /// Writing a property value.
    Write,
    /// Invoking an entity operation.
    Execute,
    /// Creating a new entity instance (entity-level only).
    Create,
}

impl fmt::Display for AuthorizationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Execute => "execute",
            Self::Create => "create",
        };
        f.write_str(s)
    }
}

/// What an authorization rule is bound to: a single property or the entity
/// as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationTarget {
    Entity,
    Property(String),
}

impl AuthorizationTarget {
    /// Shorthand for a property target.
    #[must_use]
    pub fn property(name: &str) -> Self {
        Self::Property(name.into())
    }
}

impl fmt::Display for AuthorizationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity => f.write_str("entity"),
            Self::Property(name) => f.write_str(name),
        }
    }
}

/// The role requirement a matching rule enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleRequirement {
    /// The principal must hold at least one of the listed roles.
    RequireAny(Vec<String>),
    /// A principal holding any of the listed roles is denied.
    Forbid(Vec<String>),
}

/// One authorization rule: action + target + role requirement.
///
/// Rules compose deny-overrides-allow: if any rule matching an
/// action/target pair denies the principal, the outcome is deny. A pair no
/// rule matches is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRule {
    pub action: AuthorizationAction,
    pub target: AuthorizationTarget,
    pub requirement: RoleRequirement,
}

impl AuthorizationRule {
    /// Rule requiring the principal to hold one of `roles`.
    #[must_use]
    pub fn require_role(
        action: AuthorizationAction,
        target: AuthorizationTarget,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            action,
            target,
            requirement: RoleRequirement::RequireAny(roles.into_iter().map(Into::into).collect()),
        }
    }

    /// Rule denying principals that hold any of `roles`.
    #[must_use]
    pub fn forbid_role(
        action: AuthorizationAction,
        target: AuthorizationTarget,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            action,
            target,
            requirement: RoleRequirement::Forbid(roles.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether this rule applies to the given action/target pair.
    #[must_use]
    pub fn matches(&self, action: AuthorizationAction, target: &AuthorizationTarget) -> bool {
        self.action == action && self.target == *target
    }

    /// Whether this rule permits the principal.
    #[must_use]
    pub fn permits(&self, principal: &dyn PrincipalProvider) -> bool {
        match &self.requirement {
            RoleRequirement::RequireAny(roles) => roles.iter().any(|r| principal.has_role(r)),
            RoleRequirement::Forbid(roles) => !roles.iter().any(|r| principal.has_role(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticPrincipal;

    #[test]
    fn require_role_permits_any_listed_role() {
        let rule = AuthorizationRule::require_role(
            AuthorizationAction::Write,
            AuthorizationTarget::property("role"),
            ["ProjectManager", "Administrator"],
        );

        let manager = StaticPrincipal::with_roles(["ProjectManager"]);
        let guest = StaticPrincipal::with_roles(["Guest"]);
        assert!(rule.permits(&manager));
        assert!(!rule.permits(&guest));
    }

    #[test]
    fn forbid_role_denies_listed_role() {
        let rule = AuthorizationRule::forbid_role(
            AuthorizationAction::Write,
            AuthorizationTarget::Entity,
            ["Guest"],
        );

        let guest = StaticPrincipal::with_roles(["Guest", "Reader"]);
        let manager = StaticPrincipal::with_roles(["ProjectManager"]);
        assert!(!rule.permits(&guest));
        assert!(rule.permits(&manager));
    }

    #[test]
    fn anonymous_fails_require_passes_forbid() {
        let require = AuthorizationRule::require_role(
            AuthorizationAction::Write,
            AuthorizationTarget::Entity,
            ["Admin"],
        );
        let forbid = AuthorizationRule::forbid_role(
            AuthorizationAction::Write,
            AuthorizationTarget::Entity,
            ["Admin"],
        );

        let anon = StaticPrincipal::anonymous();
        assert!(!require.permits(&anon));
        assert!(forbid.permits(&anon));
    }

    #[test]
    fn matches_requires_both_action_and_target() {
        let rule = AuthorizationRule::require_role(
            AuthorizationAction::Write,
            AuthorizationTarget::property("role"),
            ["Admin"],
        );

        assert!(rule.matches(AuthorizationAction::Write, &AuthorizationTarget::property("role")));
        assert!(!rule.matches(AuthorizationAction::Read, &AuthorizationTarget::property("role")));
        assert!(!rule.matches(AuthorizationAction::Write, &AuthorizationTarget::property("name")));
        assert!(!rule.matches(AuthorizationAction::Write, &AuthorizationTarget::Entity));
    }

    #[test]
    fn display_forms() {
        assert_eq!(AuthorizationAction::Write.to_string(), "write");
        assert_eq!(AuthorizationTarget::Entity.to_string(), "entity");
        assert_eq!(AuthorizationTarget::property("role").to_string(), "role");
    }
}
