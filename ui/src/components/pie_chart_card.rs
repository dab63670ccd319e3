//! Pie chart card for the category breakdown

use leptos::prelude::*;
use truthpulse_core::{chart::pie_slices, trends::PIE_CHART_TITLE, CategoryShare};

const WIDTH: f64 = 380.0;
const HEIGHT: f64 = 260.0;
const RADIUS: f64 = 95.0;

/// Static SVG pie chart with outside value labels and a legend
#[component]
pub fn PieChartCard(data: &'static [CategoryShare]) -> impl IntoView {
    let slices = pie_slices(data, WIDTH / 2.0, HEIGHT / 2.0 - 10.0, RADIUS);

    let legend = slices
        .iter()
        .map(|slice| {
            view! {
                <li class="flex items-center gap-1">
                    <span class="inline-block w-3 h-3" style:background-color=slice.color></span>
                    {slice.name}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white p-6 rounded-2xl shadow-md border">
            <h3 class="text-lg font-semibold mb-4">{PIE_CHART_TITLE}</h3>
            <svg width=WIDTH height=HEIGHT viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="text-xs">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <path d=slice.path.clone() fill=slice.color stroke="white">
                                <title>{format!("{}: {:.0}%", slice.name, slice.percent)}</title>
                            </path>
                            <text
                                x=slice.label_at.x
                                y=slice.label_at.y
                                text-anchor="middle"
                                dominant-baseline="middle"
                                fill=slice.color
                            >
                                {slice.value}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="flex justify-center gap-4 text-sm mt-2">{legend}</ul>
        </div>
    }
}
