use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::string_id!(ProductId);

/// Товар или услуга из каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Артикул (SKU)
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "محصول"
    }

    fn list_name() -> &'static str {
        "محصولات"
    }
}
