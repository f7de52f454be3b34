//! Fixed navigation sidebar with the four application views.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const MENU: &[(&str, &str)] = &[
    ("/", "📊 Dashboard"),
    ("/vendas", "💰 Vendas"),
    ("/clientes", "👥 Clientes"),
    ("/produtos", "📦 Produtos"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="sidebar">
            <h2 class="sidebar__title">"SofiaTech ERP"</h2>
            <ul class="sidebar__menu">
                {MENU
                    .iter()
                    .map(|&(href, label)| {
                        let class = move || {
                            if pathname.get() == href {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <li>
                                <A href=href attr:class=class>
                                    {label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
