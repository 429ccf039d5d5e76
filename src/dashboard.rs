//! Dashboard view model
//!
//! Derived numbers and labels the render tree needs. Both front ends go
//! through these so the browser and the terminal agree on what they show.

use crate::model::Crop;
use crate::state::WeatherStatus;

/// Reservoir size every fill bar is drawn against, in litres
pub const RESERVOIR_CAPACITY_LITERS: f64 = 50.0;

/// Below this many litres a reservoir bar switches to the alert colour
pub const LOW_WATER_LITERS: f64 = 20.0;

/// Advisory under the weather reading
pub const WEATHER_RECOMMENDATION: &str =
    "Next week's forecast shows rain - consider reducing irrigation";

/// Advisory in the reservoir modal
pub const RESERVOIR_RECOMMENDATION: &str =
    "Reduce watering frequency by 20% next week due to expected rainfall";

/// Placeholder of the AI note editor
pub const NOTE_PLACEHOLDER: &str = "Add notes for AI (e.g., 'Leaves wilting since Tuesday')";

pub const WEATHER_LOADING: &str = "Loading weather...";

/// Reservoir level as a percentage of [`RESERVOIR_CAPACITY_LITERS`]
///
/// Not clamped: 60 L reads as 120 %.
pub fn fill_percent(current_water: f64) -> f64 {
    current_water / RESERVOIR_CAPACITY_LITERS * 100.0
}

/// Width of a bar's filled part, limited to the bar itself
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

pub fn is_low(current_water: f64) -> bool {
    current_water < LOW_WATER_LITERS
}

/// Whole days the reservoir lasts at the crop's daily need
pub fn days_remaining(crop: &Crop) -> Option<f64> {
    if crop.water_need > 0.0 {
        Some((crop.current_water / crop.water_need).floor())
    } else {
        None
    }
}

/// Number formatting used for litres and percentages ("30", "12.5")
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", (value * 10.0).round() / 10.0)
    }
}

/// CSS width of a bar's filled part, e.g. "60%"
pub fn bar_style_width(percent: f64) -> String {
    format!("{}%", format_amount(bar_width(percent)))
}

/// One row of the reservoir list
#[derive(Debug, Clone, PartialEq)]
pub struct ReservoirRow {
    pub name: String,
    pub fill_percent: f64,
    pub low: bool,
    pub remaining_label: String,
}

impl ReservoirRow {
    pub fn from_crop(crop: &Crop) -> Self {
        Self {
            name: crop.name.clone(),
            fill_percent: fill_percent(crop.current_water),
            low: is_low(crop.current_water),
            remaining_label: format!("{}L remaining", format_amount(crop.current_water)),
        }
    }
}

/// Text of the weather panel's main line
pub fn weather_line(status: &WeatherStatus) -> String {
    match status {
        WeatherStatus::Loading => WEATHER_LOADING.to_string(),
        WeatherStatus::Ready(reading) => format!(
            "{} | {}",
            reading.condition_label(),
            reading.temperature_label()
        ),
        WeatherStatus::Failed(message) => message.clone(),
    }
}

/// Daily need label shown on crop cards, e.g. "5L/day"
pub fn water_need_label(crop: &Crop) -> String {
    format!("{}L/day", format_amount(crop.water_need))
}
