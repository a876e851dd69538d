use crate::domain::common::AggregateRoot;
use crate::enums::CustomerStatus;
use serde::{Deserialize, Serialize};

crate::string_id!(
    /// Уникальный идентификатор клиента
    CustomerId
);

/// Клиент CRM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "مشتری"
    }

    fn list_name() -> &'static str {
        "مشتریان"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_optional() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":"C-1","name":"سارا محمدی","phone":"09121112233"}"#,
        )
        .unwrap();
        assert_eq!(customer.email, None);
        assert_eq!(customer.status, CustomerStatus::Active);
    }

    #[test]
    fn test_missing_phone_is_rejected() {
        let result = serde_json::from_str::<Customer>(r#"{"id":"C-1","name":"Ali"}"#);
        assert!(result.is_err());
    }
}
