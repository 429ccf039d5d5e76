//! Location Permission Dialog
//!
//! Explains why the dashboard wants the position before the browser asks.

use leptos::*;

use karoo::location::Consent;

use crate::state::use_global_state;

#[component]
pub fn PermissionPrompt() -> impl IntoView {
    let state = use_global_state();
    let visible = create_memo(move |_| state.dashboard.with(|s| s.show_permission_prompt));

    move || {
        visible.get().then(|| view! {
            <div class="fixed inset-0 bg-black/50 z-[109]" />
            <div class="fixed top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white p-8
                        rounded-2xl shadow-2xl w-[90%] max-w-md z-[110]">
                <h2 class="text-xl font-semibold mb-3">"📍 Use your location?"</h2>
                <p class="text-slate-600 mb-6">
                    "KarooFarmer uses your location to show the current weather on your farm. "
                    "Your position is only sent to the weather service."
                </p>
                <div class="flex justify-end gap-3">
                    <button
                        class="px-5 py-2 rounded-lg bg-slate-200 text-slate-700 hover:bg-slate-300 transition"
                        on:click=move |_| state.answer_location_prompt(Consent::Decline)
                    >
                        "Decline"
                    </button>
                    <button
                        class="px-5 py-2 rounded-lg bg-emerald-800 text-white hover:bg-emerald-900 transition"
                        on:click=move |_| state.answer_location_prompt(Consent::Allow)
                    >
                        "Allow"
                    </button>
                </div>
            </div>
        })
    }
}
