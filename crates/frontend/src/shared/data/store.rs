use super::mock;
use crate::shared::global_search::SearchCollections;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_ticket::Ticket;
use contracts::domain::a003_lead::Lead;
use contracts::domain::a004_task::Task;
use contracts::domain::a005_product::Product;
use contracts::domain::a006_quote::Quote;
use contracts::domain::a007_invoice::Invoice;
use contracts::domain::a008_purchase_order::PurchaseOrder;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Snapshot of all CRM collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrmData {
    pub customers: Vec<Customer>,
    pub tickets: Vec<Ticket>,
    pub leads: Vec<Lead>,
    pub tasks: Vec<Task>,
    pub products: Vec<Product>,
    pub quotes: Vec<Quote>,
    pub invoices: Vec<Invoice>,
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl CrmData {
    /// Decode the demo data set.
    pub fn from_mock() -> Self {
        Self {
            customers: decode_collection(Customer::collection_name(), mock::customers()),
            tickets: decode_collection(Ticket::collection_name(), mock::tickets()),
            leads: decode_collection(Lead::collection_name(), mock::leads()),
            tasks: decode_collection(Task::collection_name(), mock::tasks()),
            products: decode_collection(Product::collection_name(), mock::products()),
            quotes: decode_collection(Quote::collection_name(), mock::quotes()),
            invoices: decode_collection(Invoice::collection_name(), mock::invoices()),
            purchase_orders: decode_collection(
                PurchaseOrder::collection_name(),
                mock::purchase_orders(),
            ),
        }
    }

    pub fn collections(&self) -> SearchCollections<'_> {
        SearchCollections {
            customers: &self.customers,
            tickets: &self.tickets,
            leads: &self.leads,
            tasks: &self.tasks,
            products: &self.products,
            invoices: &self.invoices,
            quotes: &self.quotes,
            purchase_orders: &self.purchase_orders,
        }
    }
}

/// Decode a collection record by record.
///
/// A malformed record (missing required field, wrong type) is logged and
/// skipped; the rest of the collection still loads.
pub fn decode_collection<T: DeserializeOwned>(collection: &str, records: Vec<Value>) -> Vec<T> {
    let total = records.len();
    let decoded: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match decode_record(record) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("{}: skipping record #{}: {}", collection, index, e);
                None
            }
        })
        .collect();
    log::debug!("{}: loaded {} of {} records", collection, decoded.len(), total);
    decoded
}

fn decode_record<T: DeserializeOwned>(record: Value) -> Result<T, String> {
    serde_json::from_value(record).map_err(|e| e.to_string())
}

/// Reactive holder of the CRM snapshot, provided at the app root.
#[derive(Clone, Copy)]
pub struct CrmDataStore {
    pub data: RwSignal<CrmData>,
}

impl CrmDataStore {
    pub fn new(data: CrmData) -> Self {
        Self {
            data: RwSignal::new(data),
        }
    }
}

pub fn use_crm_data() -> CrmDataStore {
    use_context::<CrmDataStore>().expect("CrmDataStore not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_records_are_skipped() {
        let records = vec![
            json!({"id": "C-1", "name": "Sara Mohammadi", "phone": "09121112233"}),
            json!({"id": "C-2", "phone": "0912"}),
            json!({"id": "C-3", "name": 42, "phone": "0912"}),
            json!({"id": "C-4", "name": "Reza Karimi", "phone": "09351112233"}),
        ];
        let customers: Vec<Customer> = decode_collection("customers", records);
        let ids: Vec<_> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C-1", "C-4"]);
    }

    #[test]
    fn test_mock_data_loads_every_collection() {
        let data = CrmData::from_mock();
        assert!(!data.customers.is_empty());
        assert!(!data.tickets.is_empty());
        assert!(!data.leads.is_empty());
        assert!(!data.tasks.is_empty());
        assert!(!data.products.is_empty());
        assert!(!data.quotes.is_empty());
        assert!(!data.invoices.is_empty());
        assert!(!data.purchase_orders.is_empty());
    }

    #[test]
    fn test_collections_borrow_snapshot() {
        let data = CrmData::from_mock();
        let collections = data.collections();
        assert_eq!(collections.customers.len(), data.customers.len());
        assert_eq!(collections.purchase_orders.len(), data.purchase_orders.len());
    }

    #[test]
    fn test_demo_support_agent_search() {
        use crate::shared::global_search::{search, select, PermissionEvaluator, SearchCategory};

        let data = CrmData::from_mock();
        let users = mock::users();
        let agent = users.iter().find(|u| u.username == "a.hosseini").unwrap();
        let permissions = PermissionEvaluator::new(Some(agent));

        let results = search("sara", &data.collections(), &permissions, 10);
        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C-1001", "C-1007"]);

        let intent = select(&results[1]);
        assert_eq!(intent.tab_key(), "customer_detail?id=C-1007");

        // No sales permission: the quote for the same customer stays hidden
        let results = search("Q-501", &data.collections(), &permissions, 10);
        assert!(results.iter().all(|r| r.category != SearchCategory::Quote));
    }
}
