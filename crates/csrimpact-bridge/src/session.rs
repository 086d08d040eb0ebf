use serde::{Deserialize, Serialize};

/// The two actor roles of the marketplace, controlling which side of every
/// dashboard-style view is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// A corporate donor browsing sectors and funding projects. The default
    /// whenever no role can be resolved.
    #[default]
    Company,
    /// An NGO submitting proposals and tracking their status.
    Ngo,
}

impl UserRole {
    /// Resolves the active role for a view render.
    ///
    /// Precedence: a role explicitly carried by the navigation transition
    /// wins over the persisted one, which wins over the [`UserRole::Company`]
    /// default. Never fails; the result is treated as immutable for the
    /// render pass it was resolved for.
    pub fn resolve(navigation: Option<UserRole>, persisted: Option<UserRole>) -> UserRole {
        navigation.or(persisted).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_state_wins_over_persisted() {
        let resolved = UserRole::resolve(Some(UserRole::Ngo), Some(UserRole::Company));
        assert_eq!(resolved, UserRole::Ngo);
    }

    #[test]
    fn persisted_wins_over_default() {
        let resolved = UserRole::resolve(None, Some(UserRole::Ngo));
        assert_eq!(resolved, UserRole::Ngo);
    }

    #[test]
    fn default_is_company() {
        assert_eq!(UserRole::resolve(None, None), UserRole::Company);
    }
}
