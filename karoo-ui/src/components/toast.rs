//! Toast Notification Component
//!
//! Confirms saved notes.

use leptos::*;

use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-6 right-4 z-[120] space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-emerald-600 text-white px-4 py-3
                                rounded-lg shadow-lg transform transition-all duration-300 ease-out">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
