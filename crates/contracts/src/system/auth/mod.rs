use super::roles::{PermissionSet, Role};
use serde::{Deserialize, Serialize};

/// Acting user of the CRM session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserInfo {
    /// Permissions of the user's role; `None` when no role is assigned.
    pub fn permissions(&self) -> Option<&PermissionSet> {
        self.role.as_ref().map(|role| &role.permissions)
    }

    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}
