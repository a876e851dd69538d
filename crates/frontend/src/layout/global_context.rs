use crate::layout::tabs::tab_title;
use crate::shared::global_search::NavigationIntent;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=...` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let params: HashMap<String, String> =
            serde_qs::from_str(location_search().trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.navigate(&NavigationIntent::from_tab_key(active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(url) = this.active.with(|active| active.as_deref().map(active_url)) else {
                return;
            };
            if location_search() == url {
                return;
            }
            let replaced = window()
                .ok_or_else(|| "no window".to_string())
                .and_then(|w| w.history().map_err(|e| format!("{:?}", e)))
                .and_then(|history| {
                    history
                        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
                        .map_err(|e| format!("{:?}", e))
                });
            if let Err(e) = replaced {
                log::warn!("cannot update URL to '{}': {}", url, e);
            }
        });
    }

    /// Navigation sink for the whole app: opens (or activates) the tab of `intent`.
    pub fn navigate(&self, intent: &NavigationIntent) {
        self.open_tab(&intent.tab_key(), &tab_title(intent));
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// `?active=<key>`; the tab key itself may carry a query string and is encoded.
fn active_url(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::pages;

    #[test]
    fn test_navigate_opens_each_destination_once() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        let intent = NavigationIntent::page(pages::CUSTOMER_DETAIL).with_param("id", "C-1001");
        ctx.navigate(&intent);
        ctx.navigate(&NavigationIntent::page(pages::TASKS));
        ctx.navigate(&intent);

        assert_eq!(ctx.opened.get_untracked().len(), 2);
        assert_eq!(
            ctx.active.get_untracked().as_deref(),
            Some("customer_detail?id=C-1001")
        );
    }

    #[test]
    fn test_close_active_tab_activates_last() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppGlobalContext::new();
        ctx.open_tab("customers", "Customers");
        ctx.open_tab("tickets", "Tickets");
        ctx.open_tab("tasks", "Tasks");
        ctx.activate_tab("tickets");
        ctx.close_tab("tickets");

        assert_eq!(ctx.active.get_untracked().as_deref(), Some("tasks"));
        ctx.close_tab("customers");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("tasks"));
    }

    #[test]
    fn test_active_url_round_trips_nested_key() {
        let key = "invoices?action=edit&id=INV-601";
        let url = active_url(key);
        assert!(!url[1..].contains('&'));

        let params: HashMap<String, String> = serde_qs::from_str(&url[1..]).unwrap();
        assert_eq!(params.get("active").map(String::as_str), Some(key));
    }
}
