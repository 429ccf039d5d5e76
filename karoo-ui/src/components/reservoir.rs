//! Reservoir Components
//!
//! Water-level bars and the per-crop reservoir list.

use leptos::*;

use karoo::dashboard::{bar_style_width, ReservoirRow};
use karoo::{Action, CropId};

use crate::state::use_global_state;

/// Horizontal fill bar
///
/// `level` is a percentage and may be outside 0-100; only the drawn width is
/// limited.
#[component]
pub fn WaterLevel(
    level: f64,
    #[prop(optional)]
    alert: bool,
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let fill = if alert { "bg-red-500" } else { "bg-blue-600" };
    let track = if wide { "w-full" } else { "w-40" };

    view! {
        <div class=format!("relative h-5 {} bg-slate-200 rounded-full overflow-hidden", track)>
            <div
                class=format!("absolute inset-y-0 left-0 {} transition-all duration-300", fill)
                style=format!("width: {}", bar_style_width(level))
            />
        </div>
    }
}

#[component]
pub fn ReservoirList() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="flex flex-col gap-4 bg-white p-6 rounded-xl shadow-sm">
            {move || {
                state.crops().iter().map(|crop| {
                    view! { <ReservoirItem id=crop.id row=ReservoirRow::from_crop(crop) /> }
                }).collect_view()
            }}
        </div>
    }
}

#[component]
fn ReservoirItem(id: CropId, row: ReservoirRow) -> impl IntoView {
    let state = use_global_state();

    view! {
        <div
            class="flex items-center gap-6 p-4 bg-sky-50 rounded-lg cursor-pointer transition
                   hover:bg-sky-100 hover:translate-x-1"
            on:click=move |_| state.dispatch(Action::OpenReservoir(id))
        >
            <div class="w-32 font-medium text-emerald-800">{row.name.clone()}</div>
            <WaterLevel level=row.fill_percent alert=row.low />
            <div>{row.remaining_label.clone()}</div>
        </div>
    }
}
