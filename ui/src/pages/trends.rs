use leptos::prelude::*;
use leptos_meta::Title;
use truthpulse_core::{Page, TrendsSnapshot};

use crate::components::{AlertCard, LineChartCard, PieChartCard};

/// Weekly alert plus the two static charts
#[component]
pub fn TrendsPage() -> impl IntoView {
    let snapshot = TrendsSnapshot::current();

    view! {
        <Title text=Page::Trends.title() />
        <div class="px-8 py-10">
            <AlertCard alert=snapshot.alert />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mt-6">
                <LineChartCard data=snapshot.timeline />
                <PieChartCard data=snapshot.categories />
            </div>
        </div>
    }
}
