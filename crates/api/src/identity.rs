//! Request identity resolution.
//!
//! There is no authentication yet: every request acts on behalf of the
//! fixed, pre-seeded account. That stand-in lives only here; handlers ask
//! the resolver for the current user id and thread it into repository
//! calls as plain data, so real authentication can replace this module
//! without touching handler logic.

use holocron_core::UserId;

/// The pre-seeded stand-in account every request acts as.
pub const FIXED_USER_ID: UserId = UserId::new(1);

/// Resolves the authenticated user for a request.
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver {
    current_user: UserId,
}

impl IdentityResolver {
    /// A resolver that always answers with the given user.
    #[must_use]
    pub const fn fixed(user: UserId) -> Self {
        Self { current_user: user }
    }

    /// The user id the current request acts on behalf of.
    #[must_use]
    pub const fn current_user(&self) -> UserId {
        self.current_user
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::fixed(FIXED_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolver_answers_fixed_user() {
        assert_eq!(IdentityResolver::default().current_user(), FIXED_USER_ID);
    }

    #[test]
    fn test_fixed_resolver_is_pluggable() {
        let resolver = IdentityResolver::fixed(UserId::new(42));
        assert_eq!(resolver.current_user(), UserId::new(42));
    }
}
