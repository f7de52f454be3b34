use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::customers::ui::list::CustomerSalesList;
use crate::domain::products::ui::list::ProductList;
use crate::domain::sales::ui::list::SaleList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p>"Página não encontrada."</p> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/vendas") view=SaleList />
                    <Route path=path!("/clientes") view=CustomerSalesList />
                    <Route path=path!("/produtos") view=ProductList />
                </Routes>
            </Shell>
        </Router>
    }
}
