//! KarooFarmer Dashboard
//!
//! Farm dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Crop inventory grid with detail modals
//! - Per-crop water reservoir levels
//! - Local weather from the browser's position
//! - AI notes on crops, kept for the session
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All dashboard state lives in one `karoo::DashboardState`
//! snapshot held in a signal; the only network call is the weather lookup.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
