//! Tab content registry - maps a tab key to its view.
//!
//! Tab keys are navigation intents encoded by `NavigationIntent::tab_key`.

use super::tab_labels::pages;
use crate::domain::a001_customer::ui::CustomerDetails;
use crate::domain::common::EntityList;
use crate::shared::global_search::{NavigationIntent, SearchCategory};
use leptos::logging::log;
use leptos::prelude::*;

/// Renders tab content for `key`, or a placeholder for unknown pages.
pub fn render_tab_content(key: &str) -> AnyView {
    let intent = NavigationIntent::from_tab_key(key);

    if intent.page == pages::CUSTOMER_DETAIL {
        return match intent.param("id") {
            Some(id) => view! { <CustomerDetails id=id.to_string() /> }.into_any(),
            None => unknown_page(key),
        };
    }

    match SearchCategory::from_list_page(&intent.page) {
        Some(category) => {
            let edit_id = match intent.param("action") {
                Some("edit") => intent.param("id").map(str::to_string),
                _ => None,
            };
            view! { <EntityList category=category edit_id=edit_id /> }.into_any()
        }
        None => unknown_page(key),
    }
}

fn unknown_page(key: &str) -> AnyView {
    log!("unknown tab key: '{}'", key);
    view! {
        <div class="page page--empty">
            <p>{format!("صفحه «{}» پیدا نشد", key)}</p>
        </div>
    }
    .into_any()
}
