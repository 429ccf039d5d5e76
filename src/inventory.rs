//! Crop inventory store
//!
//! Holds the crop list for the session. The only mutation is replacing a
//! crop's notes; order and every other field stay as seeded.

use thiserror::Error;

use crate::model::{seed_crops, Crop, CropId};

/// Errors from inventory updates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Crop not found: {0}")]
    CropNotFound(CropId),
}

/// In-memory crop list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inventory {
    crops: Vec<Crop>,
}

impl Inventory {
    pub fn new(crops: Vec<Crop>) -> Self {
        Self { crops }
    }

    /// Inventory with the fixed seed crops
    pub fn seeded() -> Self {
        Self::new(seed_crops())
    }

    pub fn crops(&self) -> &[Crop] {
        &self.crops
    }

    pub fn get(&self, id: CropId) -> Option<&Crop> {
        self.crops.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Replace the notes of one crop. Content is stored as given.
    pub fn set_notes(&mut self, id: CropId, notes: impl Into<String>) -> Result<(), InventoryError> {
        let crop = self
            .crops
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(InventoryError::CropNotFound(id))?;
        crop.notes = notes.into();
        Ok(())
    }
}
