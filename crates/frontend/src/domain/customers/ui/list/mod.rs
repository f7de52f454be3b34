//! Sales joined to customer names, filtered by customer-name substring.

use contracts::domain::{Customer, NameIndex, Sale};
use contracts::projections::{filter_by_query, join_sales, to_table_rows, EnrichedSale, FilterMode};
use futures::join;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::format::{format_money, format_quantity};
use crate::shared::view_state::ViewState;

#[component]
pub fn CustomerSalesList() -> impl IntoView {
    let (state, set_state) = signal(ViewState::<Vec<EnrichedSale>>::Idle);
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        set_state.set(ViewState::Loading);
        spawn_local(async move {
            let result = fetch_customer_sales().await;
            if let Err(err) = &result {
                log::error!("Failed to load customer sales: {}", err);
            }
            set_state.set(ViewState::from_result(result));
        });
    });

    view! {
        <div class="view view--customers">
            <h1>"👥 Clientes"</h1>
            <input
                type="text"
                class="filter__input"
                placeholder="Buscar por nome do cliente (ex: Ana)"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            {move || match state.get() {
                ViewState::Idle | ViewState::Loading => {
                    view! { <p>"🔄 Carregando vendas..."</p> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! {
                        <p class="view-error">"❌ " {message}</p>
                    }
                        .into_any()
                }
                ViewState::Ready(enriched) => {
                    let table = move || {
                        let filtered =
                            filter_by_query(&enriched, &query.get(), FilterMode::Customer);
                        if filtered.is_empty() {
                            return view! { <p>"Nenhuma venda encontrada."</p> }.into_any();
                        }
                        let rows = to_table_rows(&filtered);
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Cliente"</th>
                                        <th>"Produto"</th>
                                        <th>"Quantidade"</th>
                                        <th>"Valor Total (R$)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .iter()
                                        .map(|row| {
                                            view! {
                                                <tr>
                                                    <td>{row.id.clone()}</td>
                                                    <td>{row.customer.clone()}</td>
                                                    <td>{row.product.clone()}</td>
                                                    <td>{format_quantity(row.quantity)}</td>
                                                    <td>{format!("R$ {}", format_money(row.total))}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    };
                    view! { {table} }.into_any()
                }
            }}
        </div>
    }
}

/// Fetches sales and customers concurrently and joins them. Products
/// are not fetched on this view, so product references resolve through
/// an empty index: embedded and denormalized names still come through,
/// foreign keys degrade to the id itself.
async fn fetch_customer_sales() -> Result<Vec<EnrichedSale>, String> {
    let (sales, customers) = join!(api::fetch_sales(), api::fetch_customers());
    let (sales, customers) = (sales?, customers?);

    let sales: Vec<Sale> = sales.iter().map(Sale::from_raw).collect();
    let customers: Vec<Customer> = customers.iter().map(Customer::from_raw).collect();
    let index = NameIndex::from_customers(&customers);

    Ok(join_sales(&sales, &index, &NameIndex::default()))
}
