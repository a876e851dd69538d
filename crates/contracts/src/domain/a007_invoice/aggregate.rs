use crate::domain::common::AggregateRoot;
use crate::enums::DocumentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::string_id!(InvoiceId);

/// Счёт-фактура клиенту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_name: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.customer_name
    }

    fn collection_name() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "فاکتور"
    }

    fn list_name() -> &'static str {
        "فاکتورها"
    }
}
