use crate::app_shell::AppShell;
use crate::config::SearchConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::{CrmData, CrmDataStore};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Search settings baked in at build time through `CRM_SEARCH_CONFIG` (JSON).
fn load_search_config() -> SearchConfig {
    match option_env!("CRM_SEARCH_CONFIG") {
        Some(raw) => SearchConfig::from_json(raw).unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            SearchConfig::default()
        }),
        None => SearchConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(CrmDataStore::new(CrmData::from_mock()));
    provide_context(load_search_config());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
