use super::listeners::{on_document_mousedown, on_window_keydown, EventSubscription};
use super::permissions::PermissionEvaluator;
use super::presenter::{present, select, NavigationIntent};
use super::search::{search, SearchResult};
use super::state::QueryState;
use crate::config::use_search_config;
use crate::shared::data::use_crm_data;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::system::auth::context::use_auth;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};

/// Search box in the top header with a drop-down result panel.
///
/// Results are recomputed whenever the query, the CRM data or the acting user
/// changes. Ctrl+K (Cmd+K) focuses the box from anywhere; Escape or a click
/// outside closes the panel; picking a result clears the query and calls
/// `on_navigate`.
#[component]
pub fn GlobalSearch(#[prop(into)] on_navigate: Callback<NavigationIntent>) -> impl IntoView {
    let store = use_crm_data();
    let (auth_state, _) = use_auth();
    let config = use_search_config();
    let max_results = config.max_results;
    let shortcut_hint = format!("Ctrl {}", config.shortcut_key.to_uppercase());

    let state = RwSignal::new(QueryState::default());
    let input_ref = NodeRef::<html::Input>::new();
    let container_ref = NodeRef::<html::Div>::new();

    let query = Memo::new(move |_| state.with(|s| s.query.clone()));

    let results = Memo::new(move |_| {
        let query = query.get();
        auth_state.with(|auth| {
            let permissions = PermissionEvaluator::new(auth.user_info.as_ref());
            store
                .data
                .with(|data| search(&query, &data.collections(), &permissions, max_results))
        })
    });

    let select_result = move |result: SearchResult| {
        let intent = select(&result);
        state.update(|s| s.select());
        on_navigate.run(intent);
    };

    // Global listeners live exactly as long as the component
    let subscriptions = StoredValue::new_local(Vec::<EventSubscription>::new());
    Effect::new(move |_| {
        let shortcut_config = config.clone();
        let keydown = on_window_keydown(move |ev: KeyboardEvent| {
            let is_shortcut = (ev.ctrl_key() || ev.meta_key())
                && shortcut_config.is_shortcut(&ev.key(), &ev.code());
            if is_shortcut {
                ev.prevent_default();
                state.update(|s| s.shortcut());
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            } else if ev.key() == "Escape" && state.with_untracked(|s| s.panel.is_open()) {
                state.update(|s| s.escape());
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.blur();
                }
            }
        });

        let mousedown = on_document_mousedown(move |ev: MouseEvent| {
            if !state.with_untracked(|s| s.panel.is_open()) {
                return;
            }
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !container.contains(target.as_ref()) {
                state.update(|s| s.outside_click());
            }
        });

        for subscription in [keydown, mousedown] {
            match subscription {
                Ok(subscription) => subscriptions.update_value(|subs| subs.push(subscription)),
                Err(e) => log::warn!("global search: {}", e),
            }
        }
    });
    on_cleanup(move || {
        subscriptions.update_value(|subs| subs.clear());
    });

    let on_input_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" | "ArrowUp" => {
            ev.prevent_default();
            let delta = if ev.key() == "ArrowDown" { 1 } else { -1 };
            let len = results.with_untracked(Vec::len);
            state.update(|s| s.move_highlight(delta, len));
        }
        "Enter" => {
            let index = state.with_untracked(|s| s.highlighted);
            if let Some(result) = results.with_untracked(|r| r.get(index).cloned()) {
                ev.prevent_default();
                select_result(result);
            }
        }
        _ => {}
    };

    view! {
        <div class="global-search" node_ref=container_ref>
            <div class="global-search__field">
                <span class="global-search__icon">{icon("search")}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class="global-search__input"
                    placeholder="جستجو در مشتریان، تیکت‌ها، فاکتورها..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_query(value));
                    }
                    on:focus=move |_| state.update(|s| s.focus())
                    on:keydown=on_input_keydown
                />
                <kbd class="global-search__hint">{shortcut_hint}</kbd>
            </div>

            <Show when=move || state.with(|s| s.is_panel_visible())>
                <div class="global-search__panel" role="listbox">
                    {move || {
                        let items = results.get();
                        if items.is_empty() {
                            return view! {
                                <div class="global-search__empty">"نتیجه‌ای یافت نشد"</div>
                            }
                            .into_any();
                        }
                        let filter = query.get_untracked();
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(index, result)| {
                                let presented = present(&result);
                                let is_active = move || state.with(|s| s.highlighted == index);
                                view! {
                                    <button
                                        class="global-search__item"
                                        class:global-search__item--active=is_active
                                        role="option"
                                        on:mouseenter=move |_| state.update(|s| s.highlighted = index)
                                        on:click=move |_| select_result(result.clone())
                                    >
                                        <span class="global-search__item-icon">{icon(presented.icon)}</span>
                                        <span class="global-search__item-text">
                                            <span class="global-search__item-title">
                                                {highlight_matches(&presented.title, &filter)}
                                            </span>
                                            <span class="global-search__item-subtitle">
                                                {presented.subtitle.clone()}
                                            </span>
                                        </span>
                                        <span class="global-search__item-category">
                                            {presented.category_label}
                                        </span>
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
