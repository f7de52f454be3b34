use contracts::domain::{NameIndex, Product};
use contracts::projections::{
    compute_totals, filter_by_query, join_sales, stock_series, to_chart_series, EnrichedSale,
    FilterMode, Totals,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::overview::api;
use crate::shared::components::charts::{AreaChart, BarChart};
use crate::shared::components::stat_card::{CardAccent, StatCard};
use crate::shared::format::format_int;
use crate::shared::view_state::ViewState;

/// Everything the dashboard derives its cards and charts from. Built
/// once per activation; the filter controls only reslice it.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    totals: Totals,
    enriched: Vec<EnrichedSale>,
    products: Vec<Product>,
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (state, set_state) = signal(ViewState::<Snapshot>::Idle);
    let (query, set_query) = signal(String::new());
    let (mode, set_mode) = signal(FilterMode::All);

    Effect::new(move |_| {
        set_state.set(ViewState::Loading);
        spawn_local(async move {
            let result = api::fetch_overview().await.map(|data| {
                let customers = NameIndex::from_customers(&data.customers);
                let product_names = NameIndex::from_products(&data.products);
                Snapshot {
                    totals: compute_totals(&data.customers, &data.products, &data.sales),
                    enriched: join_sales(&data.sales, &customers, &product_names),
                    products: data.products,
                }
            });
            if let Err(err) = &result {
                log::error!("Failed to load dashboard data: {}", err);
            }
            set_state.set(ViewState::from_result(result));
        });
    });

    view! {
        <div class="view view--dashboard">
            <h1>"📊 Dashboard"</h1>
            {move || match state.get() {
                ViewState::Idle | ViewState::Loading => {
                    view! { <h2>"Carregando dados..."</h2> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! {
                        <div class="view-error">
                            <strong>"Erro ao buscar dados: "</strong>
                            {message}
                        </div>
                    }
                        .into_any()
                }
                ViewState::Ready(snapshot) => {
                    let Snapshot { totals, enriched, products } = snapshot;
                    let filtered = Signal::derive(move || {
                        filter_by_query(&enriched, &query.get(), mode.get())
                    });
                    let series = Signal::derive(move || to_chart_series(&filtered.get()));
                    let labels = Signal::derive(move || series.get().labels);
                    let counts = Signal::derive(move || {
                        series
                            .get()
                            .sales_counts
                            .into_iter()
                            .map(i64::from)
                            .collect::<Vec<_>>()
                    });
                    let stock = Signal::derive(move || stock_series(&series.get(), &products));

                    view! {
                        <section>
                            <div class="filter">
                                <select
                                    class="filter__select"
                                    on:change=move |ev| {
                                        set_mode.set(FilterMode::from_key(&event_target_value(&ev)))
                                    }
                                >
                                    <option value="todos">"Todos"</option>
                                    <option value="cliente">"Cliente"</option>
                                    <option value="produto">"Produto"</option>
                                    <option value="venda">"Venda (ID)"</option>
                                </select>
                                <input
                                    type="text"
                                    class="filter__input"
                                    placeholder="Digite para filtrar..."
                                    prop:value=query
                                    on:input=move |ev| set_query.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="stat-cards">
                                <StatCard
                                    label="Clientes"
                                    value=format_int(totals.customer_count as i64)
                                    accent=CardAccent::Blue
                                />
                                <StatCard
                                    label="Vendas"
                                    value=format_int(totals.sale_count as i64)
                                    accent=CardAccent::Green
                                />
                                <StatCard
                                    label="Produtos"
                                    value=format_int(totals.product_count as i64)
                                    accent=CardAccent::Yellow
                                />
                                <StatCard
                                    label="Estoque Total"
                                    value=format_int(totals.total_stock)
                                    accent=CardAccent::Red
                                />
                            </div>

                            <div class="charts">
                                <div class="chart-card">
                                    <h3>"Vendas por Produto"</h3>
                                    <BarChart labels=labels values=counts />
                                </div>
                                <div class="chart-card">
                                    <h3>"Estoque por Produto"</h3>
                                    <AreaChart labels=labels values=stock />
                                </div>
                            </div>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
