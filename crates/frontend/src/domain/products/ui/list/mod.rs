//! Products list with the exact id/name/price filter.

use contracts::domain::product::{filter_exact, Product};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api;
use crate::shared::view_state::ViewState;

#[component]
pub fn ProductList() -> impl IntoView {
    let (state, set_state) = signal(ViewState::<Vec<Product>>::Idle);
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        set_state.set(ViewState::Loading);
        spawn_local(async move {
            let result = api::fetch_products()
                .await
                .map(|raw| raw.iter().map(Product::from_raw).collect::<Vec<_>>());
            if let Err(err) = &result {
                log::error!("Failed to load products: {}", err);
            }
            set_state.set(ViewState::from_result(result));
        });
    });

    view! {
        <div class="view view--products">
            <h1>"📦 Produtos"</h1>
            <input
                type="text"
                class="filter__input"
                placeholder="Digite ID, Nome ou Preço"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            {move || match state.get() {
                ViewState::Idle | ViewState::Loading => {
                    view! { <p>"🔄 Carregando produtos..."</p> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! {
                        <p class="view-error">"❌ " {message}</p>
                    }
                        .into_any()
                }
                ViewState::Ready(products) => {
                    let table = move || {
                        let filtered = filter_exact(&products, &query.get());
                        if filtered.is_empty() {
                            return view! { <p>"Nenhum produto encontrado."</p> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Nome"</th>
                                        <th>"Preço (R$)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {filtered
                                        .iter()
                                        .map(|product| {
                                            view! {
                                                <tr>
                                                    <td>{product.id.clone()}</td>
                                                    <td>{product.name.clone()}</td>
                                                    <td>{format!("{:.2}", product.price)}</td>
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
