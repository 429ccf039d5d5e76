//! App Root Component
//!
//! Page layout and global providers.

use leptos::*;

use crate::components::{
    CropGrid, Header, ModalOverlay, PermissionPrompt, ReservoirList, Toast, WeatherPanel,
};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Location permission and weather lookup, once on first render
    create_effect(move |_| {
        state.start_weather();
    });

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-800">
            <main class="max-w-3xl mx-auto p-5">
                <Header />

                <WeatherPanel />

                <h2 class="text-xl font-semibold text-emerald-800 mb-4">"Crop Inventory"</h2>
                <CropGrid />

                <h2 class="text-xl font-semibold text-emerald-800 mt-8 mb-4">"Water Management"</h2>
                <ReservoirList />
            </main>

            // Overlays
            <ModalOverlay />
            <PermissionPrompt />
            <Toast />
        </div>
    }
}
