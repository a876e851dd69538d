//! Generic list page for a CRM category.
//!
//! Search navigates here for tickets, leads, tasks and products (no record id)
//! and for quotes, invoices and purchase orders with `action=edit&id=...`,
//! in which case the record is marked in the list.

use crate::layout::tabs::page_label;
use crate::shared::data::use_crm_data;
use crate::shared::global_search::{present, SearchCategory, SearchResult};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};
use crate::shared::number_format::to_persian_digits;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn EntityList(
    category: SearchCategory,
    /// Record opened for editing, if any.
    edit_id: Option<String>,
) -> impl IntoView {
    let store = use_crm_data();
    let (auth_state, _) = use_auth();
    let (filter, set_filter) = signal(String::new());

    let allowed = move || auth_state.with(|auth| category.is_visible(&auth.permissions()));

    let rows = Memo::new(move |_| {
        let filter = filter.get();
        store.data.with(|data| {
            let entities = data.collections().entities(category);
            filter_list(&entities, &filter)
                .into_iter()
                .map(SearchResult::from_entity)
                .collect::<Vec<_>>()
        })
    });

    let edit_banner = edit_id.clone().map(|id| {
        view! {
            <div class="page__banner">
                {format!("ویرایش {} {}", category.label(), id)}
            </div>
        }
    });

    view! {
        <div class="page" id=format!("{}--list", category.list_page())>
            <div class="page-header">
                <div class="page-header__text">
                    <span class="page-header__icon">{icon(category.icon_name())}</span>
                    <h1 class="page-header__title">{page_label(category.list_page()).to_string()}</h1>
                    <span class="page-header__subtitle">
                        {move || to_persian_digits(&rows.with(Vec::len).to_string())}
                        " مورد"
                    </span>
                </div>
                <div class="page-header__actions">
                    <SearchInput value=filter on_change=move |value| set_filter.set(value) />
                </div>
            </div>
            {edit_banner}
            <Show
                when=allowed
                fallback=|| view! { <div class="page__empty">"شما به این بخش دسترسی ندارید."</div> }
            >
                <table class="table">
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children={
                                let edit_id = edit_id.clone();
                                move |row: SearchResult| {
                                    let presented = present(&row);
                                    let title = presented.title.clone();
                                    let is_edited = edit_id.as_deref() == Some(row.id.as_str());
                                    view! {
                                        <tr class="table__row" class:table__row--selected=is_edited>
                                            <td class="table__cell">{row.id.clone()}</td>
                                            <td class="table__cell">
                                                {move || highlight_matches(&title, &filter.get())}
                                            </td>
                                            <td class="table__cell table__cell--muted">{presented.subtitle.clone()}</td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
