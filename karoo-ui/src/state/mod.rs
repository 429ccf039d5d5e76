//! State Management
//!
//! Global dashboard state and the browser side of the location flow.

pub mod geolocation;
pub mod global;

pub use geolocation::BrowserGeolocator;
pub use global::{provide_global_state, use_global_state};
