use super::search::{SearchCategory, SearchResult, SearchableEntity};
use crate::layout::tabs::pages;
use crate::shared::number_format::format_money;
use std::collections::BTreeMap;

/// What the result panel shows for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedResult {
    pub icon: &'static str,
    pub category_label: &'static str,
    pub title: String,
    pub subtitle: String,
}

/// Where selecting a result should take the user.
///
/// `page` is a destination page name, `params` an optional parameter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub page: String,
    pub params: BTreeMap<String, String>,
}

impl NavigationIntent {
    pub fn page(page: &str) -> Self {
        Self {
            page: page.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Tab key for the intent: `page` or `page?k=v&...` with keys in sorted order.
    pub fn tab_key(&self) -> String {
        if self.params.is_empty() {
            return self.page.clone();
        }
        match serde_qs::to_string(&self.params) {
            Ok(query) => format!("{}?{}", self.page, query),
            Err(e) => {
                log::warn!("cannot encode params for '{}': {}", self.page, e);
                self.page.clone()
            }
        }
    }

    /// Inverse of `tab_key`. Unparseable parameters are dropped.
    pub fn from_tab_key(key: &str) -> Self {
        match key.split_once('?') {
            Some((page, query)) => Self {
                page: page.to_string(),
                params: serde_qs::from_str(query).unwrap_or_default(),
            },
            None => Self::page(key),
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl SearchCategory {
    pub fn icon_name(&self) -> &'static str {
        match self {
            SearchCategory::Customer => "customers",
            SearchCategory::Ticket => "ticket",
            SearchCategory::Lead => "target",
            SearchCategory::Task => "check-square",
            SearchCategory::Product => "products",
            SearchCategory::Invoice => "invoices",
            SearchCategory::Quote => "file-text",
            SearchCategory::PurchaseOrder => "purchases",
        }
    }

    /// List page of the category.
    pub fn list_page(&self) -> &'static str {
        match self {
            SearchCategory::Customer => pages::CUSTOMERS,
            SearchCategory::Ticket => pages::TICKETS,
            SearchCategory::Lead => pages::LEADS,
            SearchCategory::Task => pages::TASKS,
            SearchCategory::Product => pages::PRODUCTS,
            SearchCategory::Invoice => pages::INVOICES,
            SearchCategory::Quote => pages::QUOTES,
            SearchCategory::PurchaseOrder => pages::PURCHASE_ORDERS,
        }
    }

    pub fn from_list_page(page: &str) -> Option<Self> {
        SearchCategory::PRIORITY
            .into_iter()
            .find(|category| category.list_page() == page)
    }
}

/// Second line of a result row.
pub fn subtitle_for(entity: &SearchableEntity) -> String {
    match entity {
        SearchableEntity::Customer(c) => c.email.clone().unwrap_or_else(|| c.phone.clone()),
        SearchableEntity::Ticket(t) => format!("#{} · {}", t.id, t.status.display_name()),
        SearchableEntity::Lead(l) => l
            .company_name
            .clone()
            .unwrap_or_else(|| l.status.display_name().to_string()),
        SearchableEntity::Task(t) => t.status.display_name().to_string(),
        SearchableEntity::Product(p) => p.code.clone().unwrap_or_else(|| format_money(p.price)),
        SearchableEntity::Invoice(i) => format!("{} · {}", i.id, format_money(i.total_amount)),
        SearchableEntity::Quote(q) => format!("{} · {}", q.id, format_money(q.total_amount)),
        SearchableEntity::PurchaseOrder(p) => {
            format!("{} · {}", p.id, format_money(p.total_amount))
        }
    }
}

pub fn present(result: &SearchResult) -> PresentedResult {
    PresentedResult {
        icon: result.category.icon_name(),
        category_label: result.category.label(),
        title: result.title.clone(),
        subtitle: result.subtitle.clone(),
    }
}

/// Navigation for a selected result.
///
/// Customers open their detail page; quotes, invoices and purchase orders open
/// the editor of the record; other categories open their list page without
/// the record id.
pub fn select(result: &SearchResult) -> NavigationIntent {
    match result.category {
        SearchCategory::Customer => {
            NavigationIntent::page(pages::CUSTOMER_DETAIL).with_param("id", &result.id)
        }
        SearchCategory::Quote | SearchCategory::Invoice | SearchCategory::PurchaseOrder => {
            NavigationIntent::page(result.category.list_page())
                .with_param("action", "edit")
                .with_param("id", &result.id)
        }
        SearchCategory::Ticket
        | SearchCategory::Lead
        | SearchCategory::Task
        | SearchCategory::Product => NavigationIntent::page(result.category.list_page()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer::{Customer, CustomerId};
    use contracts::domain::a002_ticket::{Ticket, TicketId};
    use contracts::domain::a005_product::{Product, ProductId};
    use contracts::domain::a006_quote::{Quote, QuoteId};
    use contracts::domain::a008_purchase_order::{PurchaseOrder, PurchaseOrderId};

    fn customer(email: Option<&str>) -> SearchResult {
        SearchResult::from_entity(SearchableEntity::Customer(Customer {
            id: CustomerId::new("C-7"),
            name: "Sara Mohammadi".to_string(),
            email: email.map(str::to_string),
            phone: "09121112233".to_string(),
            company: None,
            status: Default::default(),
        }))
    }

    fn quote() -> SearchResult {
        SearchResult::from_entity(SearchableEntity::Quote(Quote {
            id: QuoteId::new("Q-12"),
            customer_name: "Arman".to_string(),
            status: Default::default(),
            total_amount: 2_500_000.0,
            issue_date: None,
        }))
    }

    #[test]
    fn test_present_customer() {
        let presented = present(&customer(None));
        assert_eq!(presented.icon, "customers");
        assert_eq!(presented.title, "Sara Mohammadi");
        assert_eq!(presented.subtitle, "09121112233");

        let presented = present(&customer(Some("sara@example.ir")));
        assert_eq!(presented.subtitle, "sara@example.ir");
    }

    #[test]
    fn test_present_document_shows_id_and_amount() {
        let presented = present(&quote());
        assert_eq!(presented.subtitle, "Q-12 · 2,500,000 ریال");
        assert_eq!(presented.category_label, "پیش‌فاکتور");
    }

    #[test]
    fn test_select_customer_carries_id() {
        let intent = select(&customer(None));
        assert_eq!(intent.page, pages::CUSTOMER_DETAIL);
        assert_eq!(intent.param("id"), Some("C-7"));
    }

    #[test]
    fn test_select_documents_open_editor() {
        let intent = select(&quote());
        assert_eq!(intent.page, pages::QUOTES);
        assert_eq!(intent.param("action"), Some("edit"));
        assert_eq!(intent.param("id"), Some("Q-12"));

        let po = SearchResult::from_entity(SearchableEntity::PurchaseOrder(PurchaseOrder {
            id: PurchaseOrderId::new("PO-1"),
            vendor_name: "Tehran Supply".to_string(),
            status: Default::default(),
            total_amount: 0.0,
            issue_date: None,
        }));
        let intent = select(&po);
        assert_eq!(intent.page, pages::PURCHASE_ORDERS);
        assert_eq!(intent.param("id"), Some("PO-1"));
    }

    #[test]
    fn test_select_list_categories_drop_id() {
        let ticket = SearchResult::from_entity(SearchableEntity::Ticket(Ticket {
            id: TicketId::new("T-1"),
            subject: "Login issue".to_string(),
            customer_name: None,
            status: Default::default(),
            priority: Default::default(),
        }));
        assert_eq!(select(&ticket), NavigationIntent::page(pages::TICKETS));

        let product = SearchResult::from_entity(SearchableEntity::Product(Product {
            id: ProductId::new("P-1"),
            name: "Router".to_string(),
            code: None,
            price: 1_000.0,
            stock: 0,
        }));
        let intent = select(&product);
        assert_eq!(intent.page, pages::PRODUCTS);
        assert!(intent.params.is_empty());
        assert_eq!(present(&product).subtitle, "1,000 ریال");
    }

    #[test]
    fn test_list_page_lookup() {
        assert_eq!(
            SearchCategory::from_list_page(pages::PURCHASE_ORDERS),
            Some(SearchCategory::PurchaseOrder)
        );
        assert_eq!(SearchCategory::from_list_page(pages::CUSTOMER_DETAIL), None);
    }

    #[test]
    fn test_tab_key_round_trip() {
        let intent = NavigationIntent::page(pages::INVOICES)
            .with_param("id", "I-3")
            .with_param("action", "edit");
        let key = intent.tab_key();
        assert_eq!(key, "invoices?action=edit&id=I-3");
        assert_eq!(NavigationIntent::from_tab_key(&key), intent);

        assert_eq!(NavigationIntent::page(pages::TASKS).tab_key(), "tasks");
        assert_eq!(
            NavigationIntent::from_tab_key("tasks"),
            NavigationIntent::page(pages::TASKS)
        );
    }
}
