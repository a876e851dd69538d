//! Body of one opened tab.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use crate::shared::global_search::NavigationIntent;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the tab content once per open; inactive tabs stay mounted but hidden,
/// so list filters survive switching between tabs.
#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let Tab { key, .. } = tab;
    let page = NavigationIntent::from_tab_key(&key).page;

    let active_key = key.clone();
    let hidden = Memo::new(move |_| {
        tabs_store
            .active
            .with(|active| active.as_deref() != Some(active_key.as_str()))
    });

    log!("tab mounted: '{}'", key);
    let closed_key = key.clone();
    on_cleanup(move || log!("tab unmounted: '{}'", closed_key));

    view! {
        <section class="tabs__item" class:tabs__item--hidden=hidden data-page=page>
            {render_tab_content(&key)}
        </section>
    }
}
