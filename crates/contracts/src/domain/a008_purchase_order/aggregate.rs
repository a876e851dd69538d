use crate::domain::common::AggregateRoot;
use crate::enums::DocumentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::string_id!(PurchaseOrderId);

/// Заказ поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub vendor_name: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
}

impl AggregateRoot for PurchaseOrder {
    type Id = PurchaseOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.vendor_name
    }

    fn collection_name() -> &'static str {
        "purchase_orders"
    }

    fn element_name() -> &'static str {
        "سفارش خرید"
    }

    fn list_name() -> &'static str {
        "سفارش‌های خرید"
    }
}
