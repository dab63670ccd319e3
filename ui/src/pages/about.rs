use leptos::prelude::*;
use leptos_meta::Title;
use truthpulse_core::{Page, APP_NAME};

/// Static about text
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Page::About.title() />
        <div class="px-8 py-10 text-center max-w-3xl mx-auto">
            <h2 class="text-3xl font-bold mb-6">"About " {APP_NAME}</h2>
            <p class="text-gray-600 text-lg">
                "TruthPulse AI fights misinformation using AI-powered claim verification."
            </p>
        </div>
    }
}
