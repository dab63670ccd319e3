//! TruthPulse AI - Leptos front-end
//!
//! Single-page app for the claim verification demo. Scores are drawn in the
//! browser; nothing is sent to the server.

pub mod components;
pub mod pages;
pub mod score;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use truthpulse_core::{Page, APP_NAME};

use components::Navbar;
use pages::{about::AboutPage, chat::ChatPage, home::HomePage, trends::TrendsPage, verify::VerifyPage};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|page: String| format!("{page} | {APP_NAME}") />
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <Navbar />
                <main>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=segment(Page::Home) view=|| page_view(Page::Home) />
                        <Route path=segment(Page::Verify) view=|| page_view(Page::Verify) />
                        <Route path=segment(Page::Trends) view=|| page_view(Page::Trends) />
                        <Route path=segment(Page::About) view=|| page_view(Page::About) />
                        <Route path=segment(Page::Chat) view=|| page_view(Page::Chat) />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Route segment for a page, taken from the core route table.
fn segment(page: Page) -> StaticSegment<&'static str> {
    StaticSegment(page.path().trim_start_matches('/'))
}

/// Component for each page. The match is exhaustive, so a page added to the
/// route table does not compile until it has a view here.
fn page_view(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Verify => view! { <VerifyPage /> }.into_any(),
        Page::Trends => view! { <TrendsPage /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Chat => view! { <ChatPage /> }.into_any(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="pt-24 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 rounded-xl text-white font-medium bg-gradient-to-r from-blue-500 to-green-400"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
