//! Verify page
//!
//! Holds the claim text and the last drawn score. Pressing "Verify Claim"
//! draws a fresh score; the text never influences it.

use leptos::{ev, prelude::*};
use leptos_meta::Title;
use truthpulse_core::{Page, TruthScore, VerifyState};

use crate::{components::ScoreGauge, score::BrowserScoreSource};

#[component]
pub fn VerifyPage() -> impl IntoView {
    let state = RwSignal::new(VerifyState::new());
    let score = Memo::new(move |_| state.with(|s| s.score()));

    let claim_text = move || state.with(|s| s.claim_text().to_string());
    let on_input = move |ev: ev::Event| state.update(|s| s.set_claim_text(event_target_value(&ev)));
    let on_verify = move |_: ev::MouseEvent| {
        state.update(|s| {
            s.verify(&BrowserScoreSource);
        });
    };

    view! {
        <Title text=Page::Verify.title() />
        <div class="px-8 py-10 grid grid-cols-1 lg:grid-cols-2 gap-8">
            <div class="bg-white p-6 rounded-2xl shadow-md border">
                <h2 class="text-xl font-semibold mb-4">"Enter Claim to Verify"</h2>
                <textarea
                    rows="6"
                    class="w-full border rounded-xl p-3"
                    prop:value=claim_text
                    on:input=on_input
                />
                <button
                    on:click=on_verify
                    class="w-full mt-4 py-3 rounded-xl text-white bg-gradient-to-r from-blue-500 to-green-400"
                >
                    "Verify Claim"
                </button>
            </div>

            <Show when=move || score.get().is_some()>
                <ScoreCard score=Signal::derive(move || score.get().unwrap_or(TruthScore::MIN)) />
            </Show>
        </div>
    }
}

/// Gauge plus the coloured verdict label
#[component]
fn ScoreCard(score: Signal<TruthScore>) -> impl IntoView {
    let verdict = move || score.get().verdict();

    view! {
        <div class="bg-white p-6 rounded-2xl shadow-md border">
            <ScoreGauge score=score />
            <p class=move || format!("text-center font-semibold mt-3 {}", verdict().tone().text_class())>
                {move || verdict().label()}
            </p>
        </div>
    }
}
