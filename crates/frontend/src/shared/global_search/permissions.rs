use contracts::system::auth::UserInfo;

/// Answers permission questions for the acting user.
///
/// Fails closed: without a user, a role, or a permission list nothing is granted.
/// An empty token means "no restriction" and is always granted.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    user: Option<&'a UserInfo>,
}

impl<'a> PermissionEvaluator<'a> {
    pub fn new(user: Option<&'a UserInfo>) -> Self {
        Self { user }
    }

    pub fn has_permission(&self, token: &str) -> bool {
        if token.is_empty() {
            return true;
        }
        self.user
            .and_then(UserInfo::permissions)
            .map(|set| set.contains(token))
            .unwrap_or(false)
    }

    pub fn has_any_permission(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|token| self.has_permission(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::{PermissionSet, Role};

    fn user_with(role: Option<Role>) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            username: "sara".to_string(),
            full_name: None,
            email: None,
            role,
        }
    }

    fn role(csv: &str) -> Role {
        Role {
            id: "r".to_string(),
            name: "Role".to_string(),
            permissions: PermissionSet::from_csv(csv),
        }
    }

    fn has_permission(user: Option<&UserInfo>, token: &str) -> bool {
        PermissionEvaluator::new(user).has_permission(token)
    }

    #[test]
    fn test_empty_token_is_always_granted() {
        assert!(has_permission(None, ""));
        assert!(has_permission(Some(&user_with(None)), ""));
    }

    #[test]
    fn test_fails_closed_without_user_or_role() {
        assert!(!has_permission(None, "view_customers"));
        assert!(!has_permission(Some(&user_with(None)), "view_customers"));
        assert!(!has_permission(Some(&user_with(Some(role("")))), "view_customers"));
    }

    #[test]
    fn test_membership() {
        let user = user_with(Some(role("view_customers, view_tickets")));
        let evaluator = PermissionEvaluator::new(Some(&user));
        assert!(evaluator.has_permission("view_tickets"));
        assert!(!evaluator.has_permission("view_sales"));
        assert!(evaluator.has_any_permission(&["view_sales", "view_customers"]));
        assert!(!evaluator.has_any_permission(&["view_sales", "view_finance"]));
        assert!(!evaluator.has_any_permission(&[]));
    }
}
