//! Navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use truthpulse_core::{Page, APP_NAME};

/// Sticky top bar: brand, page links and the verify call-to-action
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="w-full flex items-center justify-between px-8 py-4 bg-white shadow-sm sticky top-0 z-50">
            <A href=Page::Home.path() attr:class="flex items-center gap-2 text-xl font-semibold">
                <span class="text-brand">"🛡 " {APP_NAME}</span>
            </A>

            <div class="flex gap-6 text-gray-700 font-medium">
                {Page::NAV
                    .into_iter()
                    .map(|page| view! { <A href=page.path()>{page.title()}</A> })
                    .collect_view()}
            </div>

            <A
                href=Page::Verify.path()
                attr:class="px-4 py-2 rounded-full bg-gradient-to-r from-blue-500 to-green-400 text-white font-medium"
            >
                "+ Verify Claim"
            </A>
        </nav>
    }
}
