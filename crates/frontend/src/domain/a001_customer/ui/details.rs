use crate::shared::data::use_crm_data;
use crate::shared::global_search::SearchCategory;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_customer::{Customer, CustomerId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

/// Detail page of one customer, with the customer's invoices when visible.
#[component]
pub fn CustomerDetails(id: String) -> impl IntoView {
    let store = use_crm_data();
    let (auth_state, _) = use_auth();

    let customer_id = match CustomerId::from_string(&id) {
        Ok(customer_id) => Some(customer_id),
        Err(e) => {
            log::warn!("customer details: {}", e);
            None
        }
    };
    let customer = Memo::new(move |_| {
        let customer_id = customer_id.as_ref()?;
        store
            .data
            .with(|data| data.customers.iter().find(|c| &c.id == customer_id).cloned())
    });
    let can_view =
        move || auth_state.with(|auth| SearchCategory::Customer.is_visible(&auth.permissions()));
    let can_view_invoices =
        move || auth_state.with(|auth| SearchCategory::Invoice.is_visible(&auth.permissions()));

    let invoices = Memo::new(move |_| {
        let Some(name) = customer.with(|c| c.as_ref().map(|c| c.name.clone())) else {
            return Vec::new();
        };
        store.data.with(|data| {
            data.invoices
                .iter()
                .filter(|invoice| invoice.customer_name == name)
                .map(|invoice| {
                    (
                        invoice.id.to_string(),
                        format_money(invoice.total_amount),
                        invoice.status.display_name(),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page page--detail" id="customer_detail--detail">
            <Show
                when=can_view
                fallback=|| view! { <div class="page__empty">"شما به این بخش دسترسی ندارید."</div> }
            >
                {
                    let not_found = format!("{} {} یافت نشد", Customer::element_name(), id);
                    move || match customer.get() {
                        None => view! { <div class="page__empty">{not_found.clone()}</div> }.into_any(),
                        Some(customer) => view! {
                            <div class="page-header">
                                <span class="page-header__icon">{icon("user")}</span>
                                <h1 class="page-header__title">{customer.description().to_string()}</h1>
                                <span class="page-header__subtitle">{customer.status.display_name()}</span>
                            </div>
                            <dl class="details">
                                <dt>"شناسه"</dt><dd>{customer.id.to_string()}</dd>
                                <dt>"تلفن"</dt><dd>{customer.phone.clone()}</dd>
                                <dt>"ایمیل"</dt><dd>{customer.email.clone().unwrap_or_else(|| "-".to_string())}</dd>
                                <dt>"شرکت"</dt><dd>{customer.company.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            </dl>
                            <Show when=can_view_invoices>
                                <h2 class="details__section">"فاکتورها"</h2>
                                <ul class="details__list">
                                    {move || invoices.get().into_iter().map(|(id, amount, status)| view! {
                                        <li>{format!("{} · {} · {}", id, amount, status)}</li>
                                    }).collect_view()}
                                </ul>
                            </Show>
                        }.into_any(),
                    }
                }
            </Show>
        </div>
    }
}
