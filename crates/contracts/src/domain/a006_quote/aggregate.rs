use crate::domain::common::AggregateRoot;
use crate::enums::DocumentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::string_id!(QuoteId);

/// Коммерческое предложение (пред-фактура)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub customer_name: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
}

impl AggregateRoot for Quote {
    type Id = QuoteId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.customer_name
    }

    fn collection_name() -> &'static str {
        "quotes"
    }

    fn element_name() -> &'static str {
        "پیش‌فاکتور"
    }

    fn list_name() -> &'static str {
        "پیش‌فاکتورها"
    }
}
