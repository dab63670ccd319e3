//! Half-donut truth score gauge

use leptos::prelude::*;
use truthpulse_core::{chart::gauge_arcs, TruthScore};

const SIZE: f64 = 200.0;
const INNER_RADIUS: f64 = 70.0;
const OUTER_RADIUS: f64 = 90.0;

/// Gauge filled left to right in proportion to `score`, with the number
/// printed in the hollow.
#[component]
pub fn ScoreGauge(#[prop(into)] score: Signal<TruthScore>) -> impl IntoView {
    let center = SIZE / 2.0;
    let arcs = move || gauge_arcs(score.get(), center, center, INNER_RADIUS, OUTER_RADIUS);

    view! {
        <div class="flex flex-col items-center">
            <svg
                width=SIZE
                height=SIZE / 2.0 + 10.0
                viewBox=format!("0 0 {SIZE} {}", SIZE / 2.0 + 10.0)
                role="img"
                aria-label=move || format!("Truth score {}", score.get())
            >
                {move || {
                    arcs()
                        .into_iter()
                        .map(|arc| view! { <path d=arc.path fill=arc.color /> })
                        .collect_view()
                }}
            </svg>

            <p class="text-3xl font-bold -mt-12">{move || format!("{}%", score.get())}</p>
            <p class="text-gray-500">"Truth Score"</p>
        </div>
    }
}
