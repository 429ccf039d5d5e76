//! UI Components
//!
//! Leptos components for the dashboard page and its overlays.

pub mod crop_grid;
pub mod header;
pub mod loading;
pub mod metric_item;
pub mod modal;
pub mod permission_prompt;
pub mod reservoir;
pub mod toast;
pub mod weather_panel;

pub use crop_grid::CropGrid;
pub use header::Header;
pub use loading::InlineLoading;
pub use metric_item::MetricItem;
pub use modal::ModalOverlay;
pub use permission_prompt::PermissionPrompt;
pub use reservoir::{ReservoirList, WaterLevel};
pub use toast::Toast;
pub use weather_panel::WeatherPanel;
