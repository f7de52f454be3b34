//! Raw sales list with the exact customer-id filter.

use contracts::domain::sale::{filter_by_customer_id, Sale};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::format::{format_quantity, PLACEHOLDER};
use crate::shared::view_state::ViewState;

#[component]
pub fn SaleList() -> impl IntoView {
    let (state, set_state) = signal(ViewState::<Vec<Sale>>::Idle);
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        set_state.set(ViewState::Loading);
        spawn_local(async move {
            let result = api::fetch_sales()
                .await
                .map(|raw| raw.iter().map(Sale::from_raw).collect::<Vec<_>>());
            if let Err(err) = &result {
                log::error!("Failed to load sales: {}", err);
            }
            set_state.set(ViewState::from_result(result));
        });
    });

    view! {
        <div class="view view--sales">
            <h1>"💰 Vendas"</h1>
            <input
                type="text"
                class="filter__input"
                placeholder="Buscar por Cliente ID"
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
                ViewState::Ready(sales) => {
                    let table = move || {
                        let rows = filter_by_customer_id(&sales, &query.get());
                        if rows.is_empty() {
                            return view! {
                                <p>"Nenhuma venda encontrada para este cliente."</p>
                            }
                                .into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Cliente ID"</th>
                                        <th>"Produto ID"</th>
                                        <th>"Quantidade"</th>
                                        <th>"Valor Total (R$)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .iter()
                                        .map(|sale| {
                                            view! {
                                                <tr>
                                                    <td>{sale.id.clone()}</td>
                                                    <td>
                                                        {sale
                                                            .customer
                                                            .key()
                                                            .unwrap_or(PLACEHOLDER)
                                                            .to_string()}
                                                    </td>
                                                    <td>
                                                        {sale
                                                            .product
                                                            .key()
                                                            .unwrap_or(PLACEHOLDER)
                                                            .to_string()}
                                                    </td>
                                                    <td>{format_quantity(sale.quantity)}</td>
                                                    <td>{format!("{:.2}", sale.total)}</td>
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
