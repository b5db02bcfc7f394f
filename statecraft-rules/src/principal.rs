//! The injected principal capability: "does the current principal hold
//! role R?".

use std::collections::HashSet;

/// Role membership for the current principal.
///
/// How roles are sourced (session, directory, token claims) is the host
/// application's concern; the rule engine only ever asks this one question.
pub trait PrincipalProvider: Send + Sync {
    /// True when the current principal holds the named role.
    fn has_role(&self, role: &str) -> bool;
}

/// A principal with a fixed role set.
///
/// The standard provider for tests and simple hosts where the role set is
/// known up front.
#[derive(Debug, Clone, Default)]
pub struct StaticPrincipal {
    roles: HashSet<String>,
}

impl StaticPrincipal {
    /// A principal holding the given roles.
    #[must_use]
    pub fn with_roles(roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// A principal holding no roles at all.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Grants an additional role.
    pub fn grant(&mut self, role: impl Into<String>) {
        self.roles.insert(role.into());
    }
}

impl PrincipalProvider for StaticPrincipal {
    fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}
