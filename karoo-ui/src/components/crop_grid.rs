//! Crop Grid Component
//!
//! One card per crop plus the "Add Crop" card. Clicking a card opens its
//! detail modal.

use leptos::*;

use karoo::dashboard::water_need_label;
use karoo::{Action, Crop};

use crate::state::use_global_state;

const CARD_CLASS: &str = "bg-white border border-slate-200 rounded-xl p-5 text-center cursor-pointer \
                          shadow-sm transition hover:-translate-y-0.5 hover:shadow-md hover:border-emerald-700";

#[component]
pub fn CropGrid() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="grid grid-cols-[repeat(auto-fill,minmax(160px,1fr))] gap-5 mb-8">
            <For
                each=move || state.crops()
                key=|crop| (crop.id, crop.notes.clone())
                children=move |crop| view! { <CropCard crop=crop /> }
            />
            <AddCropCard />
        </div>
    }
}

#[component]
fn CropCard(crop: Crop) -> impl IntoView {
    let state = use_global_state();
    let id = crop.id;
    let need = water_need_label(&crop);
    let has_note = !crop.notes.is_empty();

    view! {
        <div class=CARD_CLASS on:click=move |_| state.dispatch(Action::OpenCrop(id))>
            <img
                src=crop.image.clone()
                alt=crop.name.clone()
                class="w-20 h-20 object-cover rounded-lg mb-3 mx-auto border-2 border-slate-200"
            />
            <h3 class="font-semibold">{crop.name.clone()}</h3>
            <p class="text-slate-600">{need}</p>
            {has_note.then(|| view! {
                <p class="text-xs text-emerald-700 mt-1">"📝 AI note"</p>
            })}
        </div>
    }
}

/// Opens an empty crop modal; there is no create path behind it
#[component]
fn AddCropCard() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div
            class=format!("{} flex flex-col items-center justify-center gap-2", CARD_CLASS)
            on:click=move |_| state.dispatch(Action::OpenNewCrop)
        >
            <span class="text-2xl">"＋"</span>
            <span>"Add Crop"</span>
        </div>
    }
}
