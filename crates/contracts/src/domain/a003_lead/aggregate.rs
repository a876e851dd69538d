use crate::domain::common::AggregateRoot;
use crate::enums::LeadStatus;
use serde::{Deserialize, Serialize};

crate::string_id!(LeadId);

/// Лид (потенциальная продажа)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub contact_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub estimated_value: f64,
}

impl AggregateRoot for Lead {
    type Id = LeadId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.contact_name
    }

    fn collection_name() -> &'static str {
        "leads"
    }

    fn element_name() -> &'static str {
        "سرنخ"
    }

    fn list_name() -> &'static str {
        "سرنخ‌های فروش"
    }
}
