use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Row of tab headers, one per opened tab, in opening order.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="tab-strip">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <Tab tab=tab /> }
            />
        </nav>
    }
}

/// Header of one tab: click activates, the cross (or a middle click) closes it.
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let TabData { key, title } = tab;
    let key = StoredValue::new(key);

    let is_active = Memo::new(move |_| {
        key.with_value(|key| ctx.active.get().as_deref() == Some(key.as_str()))
    });
    let close = move || key.with_value(|key| ctx.close_tab(key));

    view! {
        <div
            class="tab"
            class:active=is_active
            title=key.get_value()
            on:click=move |_| key.with_value(|key| ctx.activate_tab(key))
            on:auxclick=move |ev: ev::MouseEvent| {
                if ev.button() == 1 {
                    close();
                }
            }
        >
            <span>{title}</span>
            <button
                class="tab-close"
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    close();
                }
            >
                "×"
            </button>
        </div>
    }
}
