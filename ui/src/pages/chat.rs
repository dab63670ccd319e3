use leptos::prelude::*;
use leptos_meta::Title;
use truthpulse_core::Page;

/// Placeholder for the chat assistant, which is not part of this site yet
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <Title text=Page::Chat.title() />
        <div class="px-8 py-10 text-center max-w-3xl mx-auto">
            <h2 class="text-3xl font-bold mb-6">"Chat"</h2>
            <p class="text-gray-600 text-lg">"The TruthPulse chat assistant is coming soon."</p>
            <a
                href=Page::Verify.path()
                class="inline-block mt-8 px-6 py-3 rounded-xl text-white font-medium bg-gradient-to-r from-blue-500 to-green-400"
            >
                "Verify a claim instead"
            </a>
        </div>
    }
}
