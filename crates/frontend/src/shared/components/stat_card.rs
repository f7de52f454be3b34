use leptos::prelude::*;

/// Accent palette of the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Blue,
    Green,
    Yellow,
    Red,
}

impl CardAccent {
    fn css_class(self) -> &'static str {
        match self {
            CardAccent::Blue => "stat-card stat-card--blue",
            CardAccent::Green => "stat-card stat-card--green",
            CardAccent::Yellow => "stat-card stat-card--yellow",
            CardAccent::Red => "stat-card stat-card--red",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Primary value, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Card accent color
    accent: CardAccent,
) -> impl IntoView {
    view! {
        <div class=accent.css_class()>
            <h3 class="stat-card__label">{label}</h3>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}
