//! Modal Overlay Component
//!
//! Backdrop plus the crop or reservoir detail panel. Which one shows, and
//! whether the note editor is open, comes from the dashboard snapshot.

use leptos::*;

use karoo::dashboard::{
    days_remaining, fill_percent, format_amount, is_low, NOTE_PLACEHOLDER,
    RESERVOIR_RECOMMENDATION,
};
use karoo::{Action, ActiveModal, Crop, ModalKind};

use super::{MetricItem, WaterLevel};
use crate::state::use_global_state;

const BUTTON_CLASS: &str = "inline-flex items-center gap-2 px-5 py-2 mr-2 rounded-lg bg-emerald-800 \
                            text-white transition hover:bg-emerald-900 hover:-translate-y-px";

#[component]
pub fn ModalOverlay() -> impl IntoView {
    let state = use_global_state();

    // Memo so typing in the note editor does not rebuild the panel
    let modal = create_memo(move |_| state.dashboard.with(|s| s.active_modal.clone()));

    move || {
        modal.get().map(|active| {
            view! {
                <div
                    class="fixed inset-0 bg-black/50 z-[99]"
                    on:click=move |_| state.dispatch(Action::BackdropClick)
                />
                <div class="fixed top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-white p-8
                            rounded-2xl shadow-2xl w-[90%] max-w-lg z-[100]">
                    <h2 class="text-2xl font-semibold">{active.title()}</h2>

                    <ModalBody active=active />

                    <button
                        class=format!("{} mt-6", BUTTON_CLASS)
                        on:click=move |_| state.dispatch(Action::Close)
                    >
                        "Close"
                    </button>
                </div>
            }
        })
    }
}

#[component]
fn ModalBody(active: ActiveModal) -> impl IntoView {
    match (active.kind, active.data) {
        (ModalKind::Crop, Some(crop)) => view! { <CropDetails crop=crop /> }.into_view(),
        (ModalKind::Reservoir, Some(crop)) => view! { <ReservoirDetails crop=crop /> }.into_view(),
        // "Add Crop": title only
        (_, None) => view! {}.into_view(),
    }
}

#[component]
fn CropDetails(crop: Crop) -> impl IntoView {
    let state = use_global_state();
    let editing = create_memo(move |_| state.dashboard.with(|s| s.editing));

    let level = fill_percent(crop.current_water);
    let low = is_low(crop.current_water);
    let notes = crop.notes.clone();

    view! {
        <img src=crop.image.clone() alt=crop.name.clone() class="w-24 my-4" />

        <MetricItem icon="💧">
            <div class="flex justify-between mb-2">
                <span>"Water Reserve"</span>
                <strong>{format!("{}L", format_amount(crop.current_water))}</strong>
            </div>
            <WaterLevel level=level alert=low wide=true />
        </MetricItem>

        <MetricItem icon="🌡️">
            <div class="flex justify-between">
                <span>"Daily Need"</span>
                <strong>{format!("{}L/day", format_amount(crop.water_need))}</strong>
            </div>
        </MetricItem>

        {(!notes.is_empty()).then(|| view! {
            <MetricItem icon="📝">
                <h3 class="font-semibold">"AI Note"</h3>
                <p class="mt-1 whitespace-pre-wrap">{notes.clone()}</p>
            </MetricItem>
        })}

        {move || {
            if editing.get() {
                view! { <NoteEditor /> }.into_view()
            } else {
                view! {
                    <button
                        class=format!("{} mt-4", BUTTON_CLASS)
                        on:click=move |_| state.dispatch(Action::StartEditing)
                    >
                        "✏️ Add AI Note"
                    </button>
                }.into_view()
            }
        }}
    }
}

#[component]
fn NoteEditor() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="mt-4">
            <textarea
                placeholder=NOTE_PLACEHOLDER
                class="w-full min-h-[100px] p-2 border border-slate-300 rounded-lg"
                prop:value=move || state.dashboard.with(|s| s.draft_note.clone())
                on:input=move |ev| state.dispatch(Action::EditDraft(event_target_value(&ev)))
            />
            <button
                class=format!("{} mt-2", BUTTON_CLASS)
                on:click=move |_| state.save_note()
            >
                "💾 Save Note"
            </button>
            <button
                class="mt-2 px-5 py-2 rounded-lg bg-slate-200 text-slate-700 hover:bg-slate-300 transition"
                on:click=move |_| state.dispatch(Action::CancelEditing)
            >
                "Cancel"
            </button>
        </div>
    }
}

#[component]
fn ReservoirDetails(crop: Crop) -> impl IntoView {
    let days = days_remaining(&crop)
        .map(|d| format!("{} days", format_amount(d)))
        .unwrap_or_else(|| "—".to_string());

    view! {
        <MetricItem icon="🌧️">
            <div class="flex justify-between mb-2">
                <span>"Rainfall Impact"</span>
                <strong>{format!("{}%", format_amount(crop.rainfall_impact))}</strong>
            </div>
            <WaterLevel level=crop.rainfall_impact wide=true />
        </MetricItem>

        <MetricItem icon="☀️">
            <div class="flex justify-between mb-2">
                <span>"Soil Moisture"</span>
                <strong>{format!("{}%", format_amount(crop.soil_moisture))}</strong>
            </div>
            <WaterLevel level=crop.soil_moisture wide=true />
        </MetricItem>

        <MetricItem icon="⏳">
            <div class="flex justify-between">
                <span>"Water Remaining"</span>
                <strong>{days}</strong>
            </div>
        </MetricItem>

        <MetricItem icon="🗄️">
            <h3 class="font-semibold">"AI Recommendation"</h3>
            <p class="mt-1">{RESERVOIR_RECOMMENDATION}</p>
        </MetricItem>
    }
}
