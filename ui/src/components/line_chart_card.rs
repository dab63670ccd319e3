//! Line chart card for the claims timeline

use leptos::prelude::*;
use truthpulse_core::{
    chart::{ChartFrame, LineChartLayout},
    trends::{LINE_CHART_TITLE, LINE_STROKE},
    TrendPoint,
};

/// Static SVG line chart with a dashed grid and day labels
#[component]
pub fn LineChartCard(data: &'static [TrendPoint]) -> impl IntoView {
    let layout = LineChartLayout::new(ChartFrame::LINE_CARD, data);
    let frame = layout.frame;
    let right_edge = frame.width - frame.right;
    let polyline = layout.polyline();

    view! {
        <div class="bg-white p-6 rounded-2xl shadow-md border">
            <h3 class="text-lg font-semibold mb-4">{LINE_CHART_TITLE}</h3>
            <svg
                width=frame.width
                height=frame.height
                viewBox=format!("0 0 {} {}", frame.width, frame.height)
                class="text-xs"
            >
                // grid and y-axis labels
                {layout
                    .ticks
                    .iter()
                    .map(|tick| {
                        view! {
                            <line
                                x1=frame.left
                                x2=right_edge
                                y1=tick.y
                                y2=tick.y
                                stroke="#E5E7EB"
                                stroke-dasharray="3 3"
                            />
                            <text
                                x=frame.left - 6.0
                                y=tick.y + 4.0
                                text-anchor="end"
                                fill="#6B7280"
                            >
                                {tick.value.to_string()}
                            </text>
                        }
                    })
                    .collect_view()}

                // x-axis labels
                {layout
                    .labels
                    .iter()
                    .map(|label| {
                        view! {
                            <text
                                x=label.x
                                y=frame.height - 8.0
                                text-anchor="middle"
                                fill="#6B7280"
                            >
                                {label.text}
                            </text>
                        }
                    })
                    .collect_view()}

                <polyline
                    points=polyline
                    fill="none"
                    stroke=LINE_STROKE
                    stroke-width="3"
                    stroke-linejoin="round"
                />

                {layout
                    .points
                    .iter()
                    .zip(data)
                    .map(|(point, datum)| {
                        view! {
                            <circle cx=point.x cy=point.y r="4" fill="white" stroke=LINE_STROKE stroke-width="2">
                                <title>{format!("{}: {}", datum.day, datum.claims)}</title>
                            </circle>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
