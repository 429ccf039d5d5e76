//! Location & Weather Flow
//!
//! Permission check → (optional consent) → position → weather call, written
//! as plain async steps over the [`Geolocator`] and [`WeatherProvider`] seams.
//! Each step ends in an [`Action`] for the dashboard reducer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::model::{Coordinates, WeatherReading};
use crate::state::Action;
use crate::weather::{WeatherError, WeatherProvider};

/// Geolocation permission as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
    /// The platform has no geolocation at all
    Unsupported,
}

impl FromStr for PermissionState {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(PermissionState::Granted),
            "prompt" => Ok(PermissionState::Prompt),
            "denied" => Ok(PermissionState::Denied),
            "unsupported" => Ok(PermissionState::Unsupported),
            other => Err(LocationError::UnknownPermission(other.to_string())),
        }
    }
}

/// Source of the user's position
#[async_trait(?Send)]
pub trait Geolocator {
    /// Current permission state. Must not prompt the user.
    async fn permission(&self) -> PermissionState;

    /// Request the current position
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// The user's answer to the location explanation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Allow,
    Decline,
}

/// Outcome of the permission check
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// Permission already granted, go straight to the position request
    Proceed,
    /// Show the explanation dialog first
    AskUser,
    Blocked(LocationError),
}

/// Errors from the location side of the flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Position(String),

    #[error("Unknown permission state: {0}")]
    UnknownPermission(String),
}

impl LocationError {
    /// Text shown in the weather panel
    pub fn user_message(&self) -> String {
        match self {
            LocationError::Unsupported => {
                "Geolocation is not supported by your browser".to_string()
            }
            LocationError::PermissionDenied => {
                "Location access denied. Enable location permission to see local weather."
                    .to_string()
            }
            LocationError::Position(_) | LocationError::UnknownPermission(_) => {
                "Unable to retrieve your location".to_string()
            }
        }
    }
}

/// Any failure between asking for the position and having a reading
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherFlowError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl WeatherFlowError {
    pub fn user_message(&self) -> String {
        match self {
            WeatherFlowError::Location(e) => e.user_message(),
            WeatherFlowError::Weather(e) => e.user_message(),
        }
    }
}

impl From<Result<WeatherReading, WeatherFlowError>> for Action {
    fn from(result: Result<WeatherReading, WeatherFlowError>) -> Self {
        match result {
            Ok(reading) => Action::WeatherLoaded(reading),
            Err(e) => Action::WeatherFailed(e.user_message()),
        }
    }
}

/// Classify the permission state
pub async fn check_access<G: Geolocator + ?Sized>(geo: &G) -> Access {
    match geo.permission().await {
        PermissionState::Granted => Access::Proceed,
        PermissionState::Prompt => Access::AskUser,
        PermissionState::Denied => Access::Blocked(LocationError::PermissionDenied),
        PermissionState::Unsupported => Access::Blocked(LocationError::Unsupported),
    }
}

/// Position request followed by the weather call
pub async fn fetch_local_weather<G, W>(geo: &G, weather: &W) -> Result<WeatherReading, WeatherFlowError>
where
    G: Geolocator + ?Sized,
    W: WeatherProvider + ?Sized,
{
    let position = geo.current_position().await?;
    let reading = weather.current(position).await?;

    tracing::info!(
        temp = reading.temp,
        condition = %reading.condition,
        "Weather loaded"
    );
    Ok(reading)
}

/// First-render sequence
pub async fn start<G, W>(geo: &G, weather: &W) -> Action
where
    G: Geolocator + ?Sized,
    W: WeatherProvider + ?Sized,
{
    match check_access(geo).await {
        Access::Proceed => finish(fetch_local_weather(geo, weather).await),
        Access::AskUser => Action::ShowPermissionPrompt,
        Access::Blocked(e) => {
            tracing::warn!("Location blocked: {}", e);
            Action::WeatherFailed(e.user_message())
        }
    }
}

/// Continue after the user answered the explanation dialog
///
/// Declining never touches the position request.
pub async fn resolve_consent<G, W>(consent: Consent, geo: &G, weather: &W) -> Action
where
    G: Geolocator + ?Sized,
    W: WeatherProvider + ?Sized,
{
    match consent {
        Consent::Allow => finish(fetch_local_weather(geo, weather).await),
        Consent::Decline => {
            tracing::info!("Location declined, using default data");
            Action::LocationDeclined
        }
    }
}

fn finish(result: Result<WeatherReading, WeatherFlowError>) -> Action {
    if let Err(e) = &result {
        tracing::warn!("Weather unavailable: {}", e);
    }
    Action::from(result)
}

/// Locator with a preset permission and position
///
/// Backs the CLI, where the position comes from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLocator {
    permission: PermissionState,
    position: Option<Coordinates>,
}

impl FixedLocator {
    pub fn new(permission: PermissionState, position: Option<Coordinates>) -> Self {
        Self {
            permission,
            position,
        }
    }

    /// Granted locator at a known position
    pub fn at(position: Coordinates) -> Self {
        Self::new(PermissionState::Granted, Some(position))
    }
}

#[async_trait(?Send)]
impl Geolocator for FixedLocator {
    async fn permission(&self) -> PermissionState {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.position
            .ok_or_else(|| LocationError::Position("no position configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeLocator {
        permission: PermissionState,
        position: Result<Coordinates, LocationError>,
        position_calls: Cell<u32>,
    }

    impl FakeLocator {
        fn new(permission: PermissionState) -> Self {
            Self {
                permission,
                position: Ok(Coordinates::new(-33.59, 22.2)),
                position_calls: Cell::new(0),
            }
        }

        fn failing(permission: PermissionState) -> Self {
            Self {
                position: Err(LocationError::Position("timeout expired".to_string())),
                ..Self::new(permission)
            }
        }
    }

    #[async_trait(?Send)]
    impl Geolocator for FakeLocator {
        async fn permission(&self) -> PermissionState {
            self.permission
        }

        async fn current_position(&self) -> Result<Coordinates, LocationError> {
            self.position_calls.set(self.position_calls.get() + 1);
            self.position.clone()
        }
    }

    struct FakeWeather {
        status: u16,
        body: &'static str,
        requested: RefCell<Vec<Coordinates>>,
    }

    impl FakeWeather {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl WeatherProvider for FakeWeather {
        async fn current(&self, at: Coordinates) -> Result<WeatherReading, WeatherError> {
            self.requested.borrow_mut().push(at);
            crate::weather::interpret_response(self.status, self.body)
        }
    }

    const CLOUDY: &str =
        r#"{"main":{"temp":25.6},"weather":[{"main":"Clouds","description":"overcast"}]}"#;

    #[test]
    fn test_permission_from_str() {
        assert_eq!("granted".parse::<PermissionState>().unwrap(), PermissionState::Granted);
        assert_eq!(" Prompt ".parse::<PermissionState>().unwrap(), PermissionState::Prompt);
        assert_eq!("denied".parse::<PermissionState>().unwrap(), PermissionState::Denied);
        assert!(matches!(
            "maybe".parse::<PermissionState>(),
            Err(LocationError::UnknownPermission(_))
        ));
    }

    #[tokio::test]
    async fn test_granted_fetches_weather() {
        let geo = FakeLocator::new(PermissionState::Granted);
        let weather = FakeWeather::new(200, CLOUDY);

        let action = start(&geo, &weather).await;

        match action {
            Action::WeatherLoaded(reading) => {
                assert_eq!(reading.temperature_label(), "26°C");
                assert_eq!(reading.condition_label(), "Clouds (overcast)");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(geo.position_calls.get(), 1);
        assert_eq!(*weather.requested.borrow(), vec![Coordinates::new(-33.59, 22.2)]);
    }

    #[tokio::test]
    async fn test_prompt_shows_dialog_without_position() {
        let geo = FakeLocator::new(PermissionState::Prompt);
        let weather = FakeWeather::new(200, CLOUDY);

        assert_eq!(start(&geo, &weather).await, Action::ShowPermissionPrompt);
        assert_eq!(geo.position_calls.get(), 0);
        assert!(weather.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_denied_and_unsupported_are_blocked() {
        let weather = FakeWeather::new(200, CLOUDY);

        let denied = FakeLocator::new(PermissionState::Denied);
        assert_eq!(
            start(&denied, &weather).await,
            Action::WeatherFailed(LocationError::PermissionDenied.user_message())
        );
        assert_eq!(denied.position_calls.get(), 0);

        let unsupported = FakeLocator::new(PermissionState::Unsupported);
        assert_eq!(
            start(&unsupported, &weather).await,
            Action::WeatherFailed("Geolocation is not supported by your browser".to_string())
        );
        assert_eq!(unsupported.position_calls.get(), 0);
        assert!(weather.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_decline_never_requests_position() {
        let geo = FakeLocator::new(PermissionState::Prompt);
        let weather = FakeWeather::new(200, CLOUDY);

        let action = resolve_consent(Consent::Decline, &geo, &weather).await;

        assert_eq!(action, Action::LocationDeclined);
        assert_eq!(geo.position_calls.get(), 0);
        assert!(weather.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_allow_requests_position() {
        let geo = FakeLocator::new(PermissionState::Prompt);
        let weather = FakeWeather::new(200, CLOUDY);

        let action = resolve_consent(Consent::Allow, &geo, &weather).await;

        assert!(matches!(action, Action::WeatherLoaded(_)));
        assert_eq!(geo.position_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_position_failure_skips_weather() {
        let geo = FakeLocator::failing(PermissionState::Granted);
        let weather = FakeWeather::new(200, CLOUDY);

        let action = start(&geo, &weather).await;

        assert_eq!(
            action,
            Action::WeatherFailed("Unable to retrieve your location".to_string())
        );
        assert!(weather.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_http_401_is_error_text() {
        let geo = FakeLocator::new(PermissionState::Granted);
        let weather = FakeWeather::new(401, r#"{"cod":401,"message":"Invalid API key"}"#);

        let err = fetch_local_weather(&geo, &weather).await.unwrap_err();
        assert!(matches!(
            err,
            WeatherFlowError::Weather(WeatherError::Http { status: 401, .. })
        ));

        let action = start(&geo, &weather).await;
        assert_eq!(
            action,
            Action::WeatherFailed("Failed to fetch weather data (HTTP 401)".to_string())
        );
    }

    #[tokio::test]
    async fn test_fixed_locator() {
        let geo = FixedLocator::at(Coordinates::new(1.5, 2.5));
        assert_eq!(geo.permission().await, PermissionState::Granted);
        assert_eq!(geo.current_position().await.unwrap(), Coordinates::new(1.5, 2.5));

        let nowhere = FixedLocator::new(PermissionState::Granted, None);
        assert!(matches!(
            nowhere.current_position().await,
            Err(LocationError::Position(_))
        ));
    }
}
