//! Page header with the brand

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="text-center my-8 p-6 rounded-xl text-slate-50 shadow-md
                       bg-gradient-to-br from-emerald-800 to-emerald-950">
            <h1 class="flex items-center justify-center gap-2 text-3xl font-semibold">
                <span>"💧"</span>
                <span>"KarooFarmer"</span>
            </h1>
        </header>
    }
}
