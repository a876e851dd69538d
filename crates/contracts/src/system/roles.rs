use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Permission tokens granted through roles.
pub mod permissions {
    pub const VIEW_CUSTOMERS: &str = "view_customers";
    pub const VIEW_TICKETS: &str = "view_tickets";
    pub const VIEW_SALES: &str = "view_sales";
    pub const VIEW_INVENTORY: &str = "view_inventory";
    pub const VIEW_INVOICES: &str = "view_invoices";
    pub const VIEW_FINANCE: &str = "view_finance";
    pub const MANAGE_PURCHASES: &str = "manage_purchases";
}

/// Set of permission tokens held by a role.
///
/// On the wire the set is a comma-separated string (`"view_customers,view_sales"`);
/// it is parsed once when the role is loaded. A missing or `null` value yields
/// an empty set, so an unconfigured role grants nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    /// Parse the comma-separated wire format. Tokens are trimmed, empty tokens dropped.
    pub fn from_csv(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn to_csv(&self) -> String {
        self.0.iter().cloned().collect::<Vec<_>>().join(",")
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl Serialize for PermissionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_csv())
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(PermissionSet::from_csv).unwrap_or_default())
    }
}

/// Роль пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Role {
    /// Load a role from its JSON representation.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("parsing role definition")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_trims_and_skips_empty_tokens() {
        let set = PermissionSet::from_csv(" view_customers, ,view_sales,");
        assert_eq!(set.to_csv(), "view_customers,view_sales");
        assert!(!set.contains(""));
    }

    #[test]
    fn test_membership_is_exact() {
        let set = PermissionSet::from_csv("view_customers_archive");
        assert!(!set.contains("view_customers"));
    }

    #[test]
    fn test_role_from_json_with_csv_permissions() {
        let role = Role::from_json(
            r#"{"id":"sales","name":"Sales","permissions":"view_customers,view_sales"}"#,
        )
        .unwrap();
        assert!(role.permissions.contains(permissions::VIEW_SALES));
        assert!(!role.permissions.contains(permissions::VIEW_TICKETS));
    }

    #[test]
    fn test_role_without_permissions_grants_nothing() {
        let missing = Role::from_json(r#"{"id":"guest","name":"Guest"}"#).unwrap();
        let null = Role::from_json(r#"{"id":"guest","name":"Guest","permissions":null}"#).unwrap();
        assert_eq!(missing.permissions, PermissionSet::default());
        assert_eq!(null.permissions, PermissionSet::default());
    }

    #[test]
    fn test_role_from_json_reports_context() {
        let err = Role::from_json("{").unwrap_err();
        assert!(err.to_string().contains("parsing role definition"));
    }

    #[test]
    fn test_serializes_back_to_csv() {
        let set = PermissionSet::from_csv("view_sales,view_customers");
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            "\"view_customers,view_sales\""
        );
    }
}
