//! Home/landing page

use leptos::prelude::*;
use leptos_meta::Title;
use truthpulse_core::Page;

/// Hero section with a preview input that links through to the Verify page
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=Page::Home.title() />
        <div class="pt-24 text-center px-6 max-w-4xl mx-auto">
            <h1 class="text-5xl font-bold text-gray-900 leading-tight">
                "Detect Misinformation."
                <span class="text-brand">" Verify Truth."</span>
            </h1>

            <p class="text-gray-600 text-lg mt-4">
                "TruthPulse AI verifies claims, detects misinformation, and provides "
                "evidence-based truth scores in seconds."
            </p>

            <div class="mt-10 bg-white shadow-md p-6 rounded-2xl max-w-2xl mx-auto border">
                // Preview only; claims are typed on the Verify page
                <input
                    placeholder="Paste any claim, headline or statement..."
                    class="w-full p-3 rounded-xl border focus:outline-brand"
                    disabled=true
                />

                <a
                    href=Page::Verify.path()
                    class="block w-full mt-4 py-3 rounded-xl text-white font-medium bg-gradient-to-r from-blue-500 to-green-400"
                >
                    "Verify Now"
                </a>
            </div>
        </div>
    }
}
