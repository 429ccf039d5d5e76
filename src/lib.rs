//! # KarooFarmer
//!
//! Core of a small farm dashboard: a crop inventory with per-crop water
//! reservoirs, a modal detail/edit flow, and local weather looked up from the
//! user's position.
//!
//! ## Modules
//!
//! - [`model`]: crops, coordinates and weather readings
//! - [`inventory`]: the in-memory crop store
//! - [`modal`]: modal descriptor and its states
//! - [`state`]: dashboard snapshot and its pure reducer
//! - [`location`]: permission → position → weather flow
//! - [`weather`]: OpenWeatherMap endpoint and response handling
//! - [`dashboard`]: view-model numbers and labels
//! - [`render`]: plain-text rendering
//!
//! With the default `native` feature the crate also carries [`config`],
//! [`logging`] and a `reqwest` based [`WeatherClient`]. The browser UI
//! depends on this crate without it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use karoo::{location, render, Coordinates, DashboardState, FixedLocator};
//! use karoo::{WeatherClient, WeatherEndpoint};
//!
//! #[tokio::main]
//! async fn main() {
//!     let geo = FixedLocator::at(Coordinates::new(-33.59, 22.2));
//!     let weather = WeatherClient::new(WeatherEndpoint::new("my-api-key"));
//!
//!     let action = location::start(&geo, &weather).await;
//!     let state = DashboardState::default().apply(action);
//!
//!     println!("{}", render::render_dashboard(&state));
//! }
//! ```

pub mod dashboard;
pub mod inventory;
pub mod location;
pub mod modal;
pub mod model;
pub mod render;
pub mod state;
pub mod weather;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use model::{seed_crops, Coordinates, Crop, CropId, WeatherReading};

pub use inventory::{Inventory, InventoryError};

pub use modal::{ActiveModal, ModalKind, ModalState};

pub use state::{Action, DashboardState, WeatherStatus, DECLINED_MESSAGE};

pub use location::{
    Access, Consent, FixedLocator, Geolocator, LocationError, PermissionState, WeatherFlowError,
};

pub use weather::{interpret_response, WeatherEndpoint, WeatherError, WeatherProvider};

#[cfg(feature = "native")]
pub use weather::WeatherClient;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LocationConfig, LoggingConfig, WeatherConfig};
