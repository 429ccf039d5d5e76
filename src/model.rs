//! Domain types
//!
//! Crops, coordinates and weather readings shared by the store, the
//! location flow and both front ends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a crop in the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropId(pub u32);

impl fmt::Display for CropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A crop tracked on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    /// Image path served alongside the UI
    pub image: String,
    /// Daily water requirement in litres
    pub water_need: f64,
    /// Water left in this crop's reservoir, in litres. Never clamped.
    pub current_water: f64,
    /// Rainfall impact, percent
    pub rainfall_impact: f64,
    /// Soil moisture, percent
    pub soil_moisture: f64,
    /// Free-text AI note
    #[serde(default)]
    pub notes: String,
}

impl Crop {
    pub fn new(id: u32, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: CropId(id),
            name: name.into(),
            image: image.into(),
            water_need: 0.0,
            current_water: 0.0,
            rainfall_impact: 0.0,
            soil_moisture: 0.0,
            notes: String::new(),
        }
    }

    /// Set daily need and current reservoir level (litres)
    pub fn water(mut self, need: f64, current: f64) -> Self {
        self.water_need = need;
        self.current_water = current;
        self
    }

    /// Set rainfall impact and soil moisture (percent)
    pub fn conditions(mut self, rainfall_impact: f64, soil_moisture: f64) -> Self {
        self.rainfall_impact = rainfall_impact;
        self.soil_moisture = soil_moisture;
        self
    }
}

/// The crops every session starts with
pub fn seed_crops() -> Vec<Crop> {
    vec![
        Crop::new(1, "Tomatoes", "/happy-tomato.jpeg")
            .water(5.0, 30.0)
            .conditions(65.0, 40.0),
        Crop::new(2, "Maize", "/happy-maize2.jpeg")
            .water(8.0, 45.0)
            .conditions(80.0, 60.0),
    ]
}

/// A WGS84 position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Current conditions as shown in the weather panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in °C
    pub temp: f64,
    /// Short condition label, e.g. "Clouds"
    pub condition: String,
    /// Longer description, e.g. "overcast clouds"
    pub description: String,
    /// Place name reported by the provider
    #[serde(default)]
    pub location: Option<String>,
    /// Observation time, unix seconds
    #[serde(default)]
    pub observed_at: Option<i64>,
}

impl WeatherReading {
    pub fn new(temp: f64, condition: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            temp,
            condition: condition.into(),
            description: description.into(),
            location: None,
            observed_at: None,
        }
    }

    /// Temperature rounded to whole degrees, e.g. "26°C"
    ///
    /// Halves round up (-2.5 gives -2), the same as `Math.round`.
    pub fn temperature_label(&self) -> String {
        format!("{}°C", (self.temp + 0.5).floor() as i64)
    }

    /// Condition with description, e.g. "Clouds (overcast)"
    pub fn condition_label(&self) -> String {
        if self.description.is_empty() {
            self.condition.clone()
        } else {
            format!("{} ({})", self.condition, self.description)
        }
    }

    /// "HH:MM" of the observation, UTC
    pub fn observed_label(&self) -> Option<String> {
        self.observed_at
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.format("%H:%M UTC").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_crops() {
        let crops = seed_crops();
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].id, CropId(1));
        assert_eq!(crops[0].name, "Tomatoes");
        assert_eq!(crops[0].current_water, 30.0);
        assert_eq!(crops[1].name, "Maize");
        assert_eq!(crops[1].water_need, 8.0);
        assert!(crops.iter().all(|c| c.notes.is_empty()));
    }

    #[test]
    fn test_weather_labels() {
        let reading = WeatherReading::new(25.6, "Clouds", "overcast");
        assert_eq!(reading.temperature_label(), "26°C");
        assert_eq!(reading.condition_label(), "Clouds (overcast)");

        let cold = WeatherReading::new(-3.4, "Snow", "");
        assert_eq!(cold.temperature_label(), "-3°C");
        assert_eq!(cold.condition_label(), "Snow");

        assert_eq!(WeatherReading::new(-2.5, "Snow", "").temperature_label(), "-2°C");
        assert_eq!(WeatherReading::new(12.5, "Clear", "").temperature_label(), "13°C");
    }

    #[test]
    fn test_observed_label() {
        let mut reading = WeatherReading::new(20.0, "Clear", "clear sky");
        assert_eq!(reading.observed_label(), None);

        reading.observed_at = Some(1_700_000_000);
        assert_eq!(reading.observed_label().as_deref(), Some("22:13 UTC"));
    }

    #[test]
    fn test_crop_serializes_camel_case() {
        let json = serde_json::to_value(&seed_crops()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["waterNeed"], 5.0);
        assert_eq!(json["currentWater"], 30.0);
    }
}
