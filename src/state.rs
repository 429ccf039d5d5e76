//! Dashboard State
//!
//! One explicit container for everything the dashboard shows, updated by a
//! pure reducer: `state.apply(action)` returns the next snapshot. Events that
//! make no sense in the current state return it unchanged.

use crate::inventory::Inventory;
use crate::modal::{ActiveModal, ModalKind, ModalState};
use crate::model::{CropId, WeatherReading};

/// Shown in the weather panel after the user declines the location dialog
pub const DECLINED_MESSAGE: &str = "Location access declined. Showing default farm data.";

/// What the weather panel has to show
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherStatus {
    #[default]
    Loading,
    Ready(WeatherReading),
    Failed(String),
}

impl WeatherStatus {
    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            WeatherStatus::Ready(r) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WeatherStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// UI events and async completions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Crop card clicked
    OpenCrop(CropId),
    /// "Add Crop" card clicked
    OpenNewCrop,
    /// Reservoir row clicked
    OpenReservoir(CropId),
    /// "Add AI Note"
    StartEditing,
    /// Note textarea changed
    EditDraft(String),
    /// "Save Note"
    SaveNote,
    /// "Cancel" in the note editor; discards the draft
    CancelEditing,
    /// "Close" button
    Close,
    BackdropClick,

    ShowPermissionPrompt,
    /// "Allow" in the location dialog
    LocationAllowed,
    /// "Decline" in the location dialog
    LocationDeclined,
    WeatherLoaded(WeatherReading),
    WeatherFailed(String),
}

/// Full dashboard snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub inventory: Inventory,
    pub active_modal: Option<ActiveModal>,
    pub editing: bool,
    pub draft_note: String,
    /// Crop the draft was typed for
    pub draft_crop: Option<CropId>,
    pub weather: WeatherStatus,
    pub show_permission_prompt: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Inventory::seeded())
    }
}

impl DashboardState {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            active_modal: None,
            editing: false,
            draft_note: String::new(),
            draft_crop: None,
            weather: WeatherStatus::Loading,
            show_permission_prompt: false,
        }
    }

    pub fn modal_state(&self) -> ModalState {
        ModalState::of(self.active_modal.as_ref(), self.editing)
    }

    /// Crop shown in the open modal, if any
    pub fn modal_crop_id(&self) -> Option<CropId> {
        self.active_modal
            .as_ref()
            .and_then(|m| m.data.as_ref())
            .map(|c| c.id)
    }

    /// Apply one event and return the next snapshot
    pub fn apply(mut self, action: Action) -> Self {
        let state = self.modal_state();

        match action {
            Action::OpenCrop(id) => self.open(id, ModalKind::Crop),
            Action::OpenReservoir(id) => self.open(id, ModalKind::Reservoir),
            Action::OpenNewCrop => {
                self.active_modal = Some(ActiveModal::new_crop());
                self.editing = false;
            }
            Action::StartEditing => {
                if state == ModalState::CropView && self.modal_crop_id().is_some() {
                    self.editing = true;
                } else {
                    tracing::debug!("StartEditing ignored in {:?}", state);
                }
            }
            Action::EditDraft(text) => {
                if state == ModalState::CropViewEditing {
                    self.draft_note = text;
                    self.draft_crop = self.modal_crop_id();
                }
            }
            Action::SaveNote => {
                if state != ModalState::CropViewEditing {
                    tracing::debug!("SaveNote ignored in {:?}", state);
                    return self;
                }
                if let Some(id) = self.modal_crop_id() {
                    let note = std::mem::take(&mut self.draft_note);
                    self.draft_crop = None;
                    if let Err(e) = self.inventory.set_notes(id, note) {
                        tracing::warn!("Note not saved: {}", e);
                    }
                }
                self.close();
            }
            Action::CancelEditing => {
                if state == ModalState::CropViewEditing {
                    self.discard_draft();
                    self.close();
                }
            }
            Action::Close | Action::BackdropClick => self.close(),

            Action::ShowPermissionPrompt => self.show_permission_prompt = true,
            Action::LocationAllowed => {
                self.show_permission_prompt = false;
                self.weather = WeatherStatus::Loading;
            }
            Action::LocationDeclined => {
                self.show_permission_prompt = false;
                self.weather = WeatherStatus::Failed(DECLINED_MESSAGE.to_string());
            }
            Action::WeatherLoaded(reading) => {
                self.show_permission_prompt = false;
                self.weather = WeatherStatus::Ready(reading);
            }
            Action::WeatherFailed(message) => {
                self.show_permission_prompt = false;
                self.weather = WeatherStatus::Failed(message);
            }
        }

        self
    }

    fn open(&mut self, id: CropId, kind: ModalKind) {
        let Some(crop) = self.inventory.get(id).cloned() else {
            tracing::debug!("Ignoring click on unknown crop {}", id);
            return;
        };
        if kind == ModalKind::Crop && self.draft_crop.is_some_and(|c| c != id) {
            self.discard_draft();
        }
        self.active_modal = Some(match kind {
            ModalKind::Crop => ActiveModal::crop(crop),
            ModalKind::Reservoir => ActiveModal::reservoir(crop),
        });
        self.editing = false;
    }

    fn close(&mut self) {
        self.active_modal = None;
        self.editing = false;
    }

    fn discard_draft(&mut self) {
        self.draft_note.clear();
        self.draft_crop = None;
    }
}
