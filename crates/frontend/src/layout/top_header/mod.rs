//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the application title, global search and the
//! acting user selector.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::mock;
use crate::shared::global_search::{GlobalSearch, NavigationIntent};
use crate::shared::icons::icon;
use crate::system::auth::context::{switch_user, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();
    let is_sidebar_visible = move || ctx.left_open.get();

    let on_navigate = Callback::new(move |intent: NavigationIntent| ctx.navigate(&intent));

    let users = mock::users();
    let selected_user_id = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.id)
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "پنهان کردن منو" } else { "نمایش منو" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"سامانه مدیریت ارتباط با مشتری"</span>
            </div>

            <div class="top-header__search">
                <GlobalSearch on_navigate=on_navigate />
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <select
                        prop:value=selected_user_id
                        on:change=move |ev| switch_user(set_auth_state, &event_target_value(&ev))
                    >
                        {users
                            .into_iter()
                            .map(|user| {
                                let label = match &user.role {
                                    Some(role) => format!("{} ({})", user.display_name(), role.name),
                                    None => user.display_name().to_string(),
                                };
                                view! { <option value=user.id.clone()>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}
