//! Modal descriptor and the states it can be in

use serde::{Deserialize, Serialize};

use crate::model::Crop;

/// Which kind of detail overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Crop,
    Reservoir,
}

/// The currently open overlay
///
/// `data` is a snapshot of the crop taken when the card or row was clicked.
/// It is `None` only for the "Add Crop" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveModal {
    #[serde(rename = "type")]
    pub kind: ModalKind,
    pub data: Option<Crop>,
}

impl ActiveModal {
    pub fn crop(crop: Crop) -> Self {
        Self {
            kind: ModalKind::Crop,
            data: Some(crop),
        }
    }

    pub fn new_crop() -> Self {
        Self {
            kind: ModalKind::Crop,
            data: None,
        }
    }

    pub fn reservoir(crop: Crop) -> Self {
        Self {
            kind: ModalKind::Reservoir,
            data: Some(crop),
        }
    }

    /// Title shown at the top of the overlay
    pub fn title(&self) -> String {
        match (self.kind, &self.data) {
            (ModalKind::Crop, Some(crop)) => crop.name.clone(),
            (ModalKind::Crop, None) => "New Crop".to_string(),
            (ModalKind::Reservoir, Some(crop)) => format!("{} Water Metrics", crop.name),
            (ModalKind::Reservoir, None) => "Water Metrics".to_string(),
        }
    }
}

/// Observable state of the modal overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    CropView,
    CropViewEditing,
    ReservoirView,
}

impl ModalState {
    pub fn of(modal: Option<&ActiveModal>, editing: bool) -> Self {
        match modal {
            None => ModalState::Closed,
            Some(m) if m.kind == ModalKind::Reservoir => ModalState::ReservoirView,
            Some(_) if editing => ModalState::CropViewEditing,
            Some(_) => ModalState::CropView,
        }
    }
}
