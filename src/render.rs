//! Plain-text rendering of the dashboard for the terminal

use std::fmt;

use crate::dashboard::{
    bar_width, water_need_label, weather_line, ReservoirRow, WEATHER_RECOMMENDATION,
};
use crate::state::{DashboardState, WeatherStatus};

const BAR_CELLS: usize = 20;

/// `[#####-----]` style bar for a percentage
pub fn text_bar(percent: f64) -> String {
    let filled = ((bar_width(percent) / 100.0) * BAR_CELLS as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

/// Whole dashboard page
pub fn render_dashboard(state: &DashboardState) -> String {
    DashboardText(state).to_string()
}

/// Weather panel with its advisory
pub fn render_weather(status: &WeatherStatus) -> String {
    WeatherText(status).to_string()
}

struct DashboardText<'a>(&'a DashboardState);

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "=== KarooFarmer ===")?;
        writeln!(f)?;
        write!(f, "{}", WeatherText(&state.weather))?;
        writeln!(f)?;

        writeln!(f, "Crop Inventory")?;
        for crop in state.inventory.crops() {
            writeln!(
                f,
                "  [{}] {:<12} {}",
                crop.id,
                crop.name,
                water_need_label(crop)
            )?;
            if !crop.notes.is_empty() {
                writeln!(f, "      note: {}", crop.notes)?;
            }
        }
        writeln!(f, "  [+] Add Crop")?;
        writeln!(f)?;

        writeln!(f, "Water Management")?;
        for crop in state.inventory.crops() {
            let row = ReservoirRow::from_crop(crop);
            writeln!(
                f,
                "  {:<12} {} {}{}",
                row.name,
                text_bar(row.fill_percent),
                row.remaining_label,
                if row.low { "  (low)" } else { "" }
            )?;
        }
        Ok(())
    }
}

struct WeatherText<'a>(&'a WeatherStatus);

impl fmt::Display for WeatherText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.0;

        writeln!(f, "Current Weather")?;
        writeln!(f, "  {}", weather_line(status))?;
        if let Some(reading) = status.reading() {
            match (&reading.location, reading.observed_label()) {
                (Some(place), Some(at)) => writeln!(f, "  {} at {}", place, at)?,
                (Some(place), None) => writeln!(f, "  {}", place)?,
                _ => {}
            }
        }
        writeln!(f, "AI Recommendation")?;
        writeln!(f, "  {}", WEATHER_RECOMMENDATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CropId, WeatherReading};
    use crate::state::Action;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(60.0), format!("[{}{}]", "#".repeat(12), "-".repeat(8)));
        assert_eq!(text_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(text_bar(150.0), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_render_dashboard() {
        let state = DashboardState::default()
            .apply(Action::WeatherLoaded(WeatherReading::new(25.6, "Clouds", "overcast")));
        let text = render_dashboard(&state);

        assert!(text.contains("Clouds (overcast) | 26°C"));
        assert!(text.contains("[1] Tomatoes"));
        assert!(text.contains("5L/day"));
        assert!(text.contains("[+] Add Crop"));
        assert!(text.contains("30L remaining"));
        assert!(!text.contains("(low)"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn test_render_shows_notes_and_errors() {
        let state = DashboardState::default()
            .apply(Action::OpenCrop(CropId(2)))
            .apply(Action::StartEditing)
            .apply(Action::EditDraft("tassels browning".to_string()))
            .apply(Action::SaveNote)
            .apply(Action::WeatherFailed("Unable to retrieve your location".to_string()));
        let text = render_dashboard(&state);

        assert!(text.contains("note: tassels browning"));
        assert!(text.contains("  Unable to retrieve your location"));
    }

    #[test]
    fn test_render_weather_location() {
        let mut reading = WeatherReading::new(18.0, "Clear", "clear sky");
        reading.location = Some("Oudtshoorn".to_string());
        let text = render_weather(&WeatherStatus::Ready(reading));
        assert!(text.contains("  Oudtshoorn\n"));
    }
}
