//! Sidebar with one entry per CRM section.
//!
//! Entries follow the same permission gates as global search, so a user never
//! sees a section the search would hide from them.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::global_search::{NavigationIntent, SearchCategory};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let visible_categories = Memo::new(move |_| {
        auth_state.with(|state| {
            let permissions = state.permissions();
            SearchCategory::PRIORITY
                .into_iter()
                .filter(|category| category.is_visible(&permissions))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <nav class="app-sidebar__content">
            <For
                each=move || visible_categories.get()
                key=|category| *category
                children=move |category| {
                    let page = category.list_page();
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.get().as_deref() == Some(page)
                            }
                            on:click=move |_| ctx.navigate(&NavigationIntent::page(page))
                        >
                            <div class="app-sidebar__item-content">
                                {icon(category.icon_name())}
                                <span>{category.label()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </nav>
    }
}
