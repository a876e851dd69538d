//! Page names and tab titles - the single place where they are defined.

use crate::shared::global_search::{NavigationIntent, SearchCategory};
use contracts::domain::a001_customer::Customer;
use contracts::domain::common::AggregateRoot;

/// Destination page names used by navigation intents and tab keys.
pub mod pages {
    pub const CUSTOMERS: &str = "customers";
    pub const CUSTOMER_DETAIL: &str = "customer_detail";
    pub const TICKETS: &str = "tickets";
    pub const LEADS: &str = "leads";
    pub const TASKS: &str = "tasks";
    pub const PRODUCTS: &str = "products";
    pub const QUOTES: &str = "quotes";
    pub const INVOICES: &str = "invoices";
    pub const PURCHASE_ORDERS: &str = "purchase_orders";
}

/// Readable title of a page; falls back to the page name itself.
pub fn page_label(page: &str) -> &str {
    if page == pages::CUSTOMER_DETAIL {
        return Customer::element_name();
    }
    match SearchCategory::from_list_page(page) {
        Some(category) => category.list_label(),
        None => page,
    }
}

/// Tab title for a navigation intent: `"مشتری C-1001"`, `"فاکتورها · ویرایش INV-601"`.
pub fn tab_title(intent: &NavigationIntent) -> String {
    let label = page_label(&intent.page);
    match (intent.param("action"), intent.param("id")) {
        (Some("edit"), Some(id)) => format!("{} · ویرایش {}", label, id),
        (_, Some(id)) => format!("{} {}", label, id),
        _ => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_titles() {
        assert_eq!(tab_title(&NavigationIntent::page(pages::TASKS)), "وظایف");
        assert_eq!(
            tab_title(&NavigationIntent::page(pages::CUSTOMER_DETAIL).with_param("id", "C-1")),
            "مشتری C-1"
        );
        assert_eq!(
            tab_title(
                &NavigationIntent::page(pages::INVOICES)
                    .with_param("action", "edit")
                    .with_param("id", "INV-601")
            ),
            "فاکتورها · ویرایش INV-601"
        );
        assert_eq!(tab_title(&NavigationIntent::page("unknown")), "unknown");
    }
}
