//! Labelled headline number used on the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>, #[prop(optional)] hint: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
        </div>
    }
}
