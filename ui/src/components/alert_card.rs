use leptos::prelude::*;
use truthpulse_core::TrendAlert;

/// Yellow banner with the weekly alert
#[component]
pub fn AlertCard(alert: TrendAlert) -> impl IntoView {
    view! {
        <div class="bg-yellow-50 border border-yellow-200 text-yellow-700 p-4 rounded-xl" role="alert">
            <strong>{alert.headline}</strong>
            <p class="text-sm">{alert.detail}</p>
        </div>
    }
}
