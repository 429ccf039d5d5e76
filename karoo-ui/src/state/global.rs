//! Global Application State
//!
//! Reactive wrapper around `karoo::DashboardState`. Every change goes
//! through `dispatch`, which swaps in the snapshot returned by the reducer.

use leptos::*;

use karoo::location::{self, Consent};
use karoo::{Action, Crop, DashboardState, ModalState};

use super::BrowserGeolocator;
use crate::api::BrowserWeather;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Crops, modal, draft note, weather and prompt flag
    pub dashboard: RwSignal<DashboardState>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        dashboard: create_rw_signal(DashboardState::default()),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Run one event through the reducer
    pub fn dispatch(&self, action: Action) {
        self.dashboard.update(|current| {
            let snapshot = std::mem::take(current);
            *current = snapshot.apply(action);
        });
    }

    pub fn crops(&self) -> Vec<Crop> {
        self.dashboard.with(|s| s.inventory.crops().to_vec())
    }

    /// Save the draft and confirm with a toast
    pub fn save_note(&self) {
        let name = self.dashboard.with_untracked(|s| {
            s.active_modal
                .as_ref()
                .and_then(|m| m.data.as_ref())
                .map(|c| c.name.clone())
        });
        let was_editing = self.modal_state_untracked() == ModalState::CropViewEditing;

        self.dispatch(Action::SaveNote);

        if let (true, Some(name)) = (was_editing, name) {
            self.show_success(&format!("Note saved for {}", name));
        }
    }

    fn modal_state_untracked(&self) -> ModalState {
        self.dashboard.with_untracked(|s| s.modal_state())
    }

    /// Permission check and, when already granted, the weather lookup
    pub fn start_weather(&self) {
        let state = *self;
        spawn_local(async move {
            let action = location::start(&BrowserGeolocator, &BrowserWeather::default()).await;
            log_weather_outcome(&action);
            state.dispatch(action);
        });
    }

    /// Allow/Decline from the location dialog
    pub fn answer_location_prompt(&self, consent: Consent) {
        if consent == Consent::Allow {
            self.dispatch(Action::LocationAllowed);
        }

        let state = *self;
        spawn_local(async move {
            let action =
                location::resolve_consent(consent, &BrowserGeolocator, &BrowserWeather::default())
                    .await;
            log_weather_outcome(&action);
            state.dispatch(action);
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

fn log_weather_outcome(action: &Action) {
    if let Action::WeatherFailed(message) = action {
        web_sys::console::warn_1(&format!("Weather unavailable: {}", message).into());
    }
}
