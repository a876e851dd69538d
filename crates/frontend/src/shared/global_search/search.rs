use super::permissions::PermissionEvaluator;
use super::presenter::subtitle_for;
use crate::shared::list_utils::Searchable;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_ticket::Ticket;
use contracts::domain::a003_lead::Lead;
use contracts::domain::a004_task::Task;
use contracts::domain::a005_product::Product;
use contracts::domain::a006_quote::Quote;
use contracts::domain::a007_invoice::Invoice;
use contracts::domain::a008_purchase_order::PurchaseOrder;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::system::roles::permissions::*;

/// Searchable entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Customer,
    Ticket,
    Lead,
    Task,
    Product,
    Invoice,
    Quote,
    PurchaseOrder,
}

/// Who may see results of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionGate {
    /// Visible to every signed-in user.
    Always,
    /// Visible when any of the listed permissions is held.
    AnyOf(&'static [&'static str]),
}

impl PermissionGate {
    pub fn allows(&self, permissions: &PermissionEvaluator<'_>) -> bool {
        match self {
            PermissionGate::Always => true,
            PermissionGate::AnyOf(tokens) => permissions.has_any_permission(tokens),
        }
    }
}

impl SearchCategory {
    /// Scan and output order. Results of an earlier category always precede
    /// results of a later one.
    pub const PRIORITY: [SearchCategory; 8] = [
        SearchCategory::Customer,
        SearchCategory::Ticket,
        SearchCategory::Lead,
        SearchCategory::Task,
        SearchCategory::Product,
        SearchCategory::Invoice,
        SearchCategory::Quote,
        SearchCategory::PurchaseOrder,
    ];

    pub fn gate(&self) -> PermissionGate {
        match self {
            SearchCategory::Customer => PermissionGate::AnyOf(&[VIEW_CUSTOMERS]),
            SearchCategory::Ticket => PermissionGate::AnyOf(&[VIEW_TICKETS]),
            SearchCategory::Lead => PermissionGate::AnyOf(&[VIEW_SALES]),
            SearchCategory::Task => PermissionGate::Always,
            SearchCategory::Product => PermissionGate::AnyOf(&[VIEW_SALES, VIEW_INVENTORY]),
            SearchCategory::Invoice => {
                PermissionGate::AnyOf(&[VIEW_INVOICES, VIEW_SALES, VIEW_FINANCE])
            }
            SearchCategory::Quote => PermissionGate::AnyOf(&[VIEW_SALES]),
            SearchCategory::PurchaseOrder => PermissionGate::AnyOf(&[MANAGE_PURCHASES]),
        }
    }

    pub fn is_visible(&self, permissions: &PermissionEvaluator<'_>) -> bool {
        self.gate().allows(permissions)
    }

    /// Persian label shown next to results.
    pub fn label(&self) -> &'static str {
        match self {
            SearchCategory::Customer => Customer::element_name(),
            SearchCategory::Ticket => Ticket::element_name(),
            SearchCategory::Lead => Lead::element_name(),
            SearchCategory::Task => Task::element_name(),
            SearchCategory::Product => Product::element_name(),
            SearchCategory::Invoice => Invoice::element_name(),
            SearchCategory::Quote => Quote::element_name(),
            SearchCategory::PurchaseOrder => PurchaseOrder::element_name(),
        }
    }

    /// Persian title of the category's list page.
    pub fn list_label(&self) -> &'static str {
        match self {
            SearchCategory::Customer => Customer::list_name(),
            SearchCategory::Ticket => Ticket::list_name(),
            SearchCategory::Lead => Lead::list_name(),
            SearchCategory::Task => Task::list_name(),
            SearchCategory::Product => Product::list_name(),
            SearchCategory::Invoice => Invoice::list_name(),
            SearchCategory::Quote => Quote::list_name(),
            SearchCategory::PurchaseOrder => PurchaseOrder::list_name(),
        }
    }
}

/// A record from one of the CRM collections.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchableEntity {
    Customer(Customer),
    Ticket(Ticket),
    Lead(Lead),
    Task(Task),
    Product(Product),
    Invoice(Invoice),
    Quote(Quote),
    PurchaseOrder(PurchaseOrder),
}

impl SearchableEntity {
    pub fn category(&self) -> SearchCategory {
        match self {
            SearchableEntity::Customer(_) => SearchCategory::Customer,
            SearchableEntity::Ticket(_) => SearchCategory::Ticket,
            SearchableEntity::Lead(_) => SearchCategory::Lead,
            SearchableEntity::Task(_) => SearchCategory::Task,
            SearchableEntity::Product(_) => SearchCategory::Product,
            SearchableEntity::Invoice(_) => SearchCategory::Invoice,
            SearchableEntity::Quote(_) => SearchCategory::Quote,
            SearchableEntity::PurchaseOrder(_) => SearchCategory::PurchaseOrder,
        }
    }

    /// Id and display title of the wrapped record.
    fn id_and_title(&self) -> (&str, &str) {
        match self {
            SearchableEntity::Customer(c) => id_and_description(c),
            SearchableEntity::Ticket(t) => id_and_description(t),
            SearchableEntity::Lead(l) => id_and_description(l),
            SearchableEntity::Task(t) => id_and_description(t),
            SearchableEntity::Product(p) => id_and_description(p),
            SearchableEntity::Invoice(i) => id_and_description(i),
            SearchableEntity::Quote(q) => id_and_description(q),
            SearchableEntity::PurchaseOrder(p) => id_and_description(p),
        }
    }

    /// Identifier, unique within the entity's own collection only.
    pub fn id(&self) -> &str {
        self.id_and_title().0
    }

    pub fn title(&self) -> &str {
        self.id_and_title().1
    }
}

fn id_and_description<A: AggregateRoot>(aggregate: &A) -> (&str, &str) {
    (aggregate.id().as_str(), aggregate.description())
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), self.email.as_deref(), Some(self.phone.as_str())]
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.subject.as_str()), Some(self.id.as_str())]
    }
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.contact_name.as_str()), self.company_name.as_deref()]
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.title.as_str())]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), self.code.as_deref()]
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.customer_name.as_str()), Some(self.id.as_str())]
    }
}

impl Searchable for Quote {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.customer_name.as_str()), Some(self.id.as_str())]
    }
}

impl Searchable for PurchaseOrder {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.vendor_name.as_str()), Some(self.id.as_str())]
    }
}

impl Searchable for SearchableEntity {
    fn search_fields(&self) -> Vec<Option<&str>> {
        match self {
            SearchableEntity::Customer(c) => c.search_fields(),
            SearchableEntity::Ticket(t) => t.search_fields(),
            SearchableEntity::Lead(l) => l.search_fields(),
            SearchableEntity::Task(t) => t.search_fields(),
            SearchableEntity::Product(p) => p.search_fields(),
            SearchableEntity::Invoice(i) => i.search_fields(),
            SearchableEntity::Quote(q) => q.search_fields(),
            SearchableEntity::PurchaseOrder(p) => p.search_fields(),
        }
    }
}

/// One row of the result panel. Built per query, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: SearchCategory,
    pub entity: SearchableEntity,
}

impl SearchResult {
    pub fn from_entity(entity: SearchableEntity) -> Self {
        Self {
            id: entity.id().to_string(),
            title: entity.title().to_string(),
            subtitle: subtitle_for(&entity),
            category: entity.category(),
            entity,
        }
    }
}

/// Read-only view of the collections owned by the data layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCollections<'a> {
    pub customers: &'a [Customer],
    pub tickets: &'a [Ticket],
    pub leads: &'a [Lead],
    pub tasks: &'a [Task],
    pub products: &'a [Product],
    pub invoices: &'a [Invoice],
    pub quotes: &'a [Quote],
    pub purchase_orders: &'a [PurchaseOrder],
}

impl SearchCollections<'_> {
    /// All records of one category, in collection order.
    pub fn entities(&self, category: SearchCategory) -> Vec<SearchableEntity> {
        let mut out = Vec::new();
        self.collect(category, None, &mut out, usize::MAX);
        out
    }

    /// Appends records of `category` (matching `needle`, when given) until `out` holds `cap` items.
    fn collect(
        &self,
        category: SearchCategory,
        needle: Option<&str>,
        out: &mut Vec<SearchableEntity>,
        cap: usize,
    ) {
        match category {
            SearchCategory::Customer => {
                collect_matches(self.customers, needle, SearchableEntity::Customer, out, cap)
            }
            SearchCategory::Ticket => {
                collect_matches(self.tickets, needle, SearchableEntity::Ticket, out, cap)
            }
            SearchCategory::Lead => collect_matches(self.leads, needle, SearchableEntity::Lead, out, cap),
            SearchCategory::Task => collect_matches(self.tasks, needle, SearchableEntity::Task, out, cap),
            SearchCategory::Product => {
                collect_matches(self.products, needle, SearchableEntity::Product, out, cap)
            }
            SearchCategory::Invoice => {
                collect_matches(self.invoices, needle, SearchableEntity::Invoice, out, cap)
            }
            SearchCategory::Quote => {
                collect_matches(self.quotes, needle, SearchableEntity::Quote, out, cap)
            }
            SearchCategory::PurchaseOrder => collect_matches(
                self.purchase_orders,
                needle,
                SearchableEntity::PurchaseOrder,
                out,
                cap,
            ),
        }
    }
}

fn collect_matches<T: Searchable + Clone>(
    items: &[T],
    needle: Option<&str>,
    wrap: fn(T) -> SearchableEntity,
    out: &mut Vec<SearchableEntity>,
    cap: usize,
) {
    for item in items {
        if out.len() >= cap {
            return;
        }
        if needle.map_or(true, |needle| item.matches_lowercase(needle)) {
            out.push(wrap(item.clone()));
        }
    }
}

/// Permission-gated search over all CRM collections.
///
/// Categories are scanned in `SearchCategory::PRIORITY` order, matches keep
/// their collection order, and the concatenation is cut at `max_results`.
/// A blank query returns nothing without scanning.
pub fn search(
    query: &str,
    collections: &SearchCollections<'_>,
    permissions: &PermissionEvaluator<'_>,
    max_results: usize,
) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for category in SearchCategory::PRIORITY {
        if matches.len() >= max_results {
            break;
        }
        if !category.is_visible(permissions) {
            continue;
        }
        collections.collect(category, Some(&needle), &mut matches, max_results);
    }

    log::debug!(
        "global search: query of {} chars -> {} results",
        needle.chars().count(),
        matches.len()
    );

    matches.into_iter().map(SearchResult::from_entity).collect()
}
