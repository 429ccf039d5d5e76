//! Loading Component
//!
//! Spinner shown while the weather lookup is in flight.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4 align-middle mr-2" />
    }
}
