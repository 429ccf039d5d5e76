//! Browser Geolocation
//!
//! `navigator.permissions` and `navigator.geolocation` wrapped as awaitable
//! calls behind `karoo::Geolocator`.

use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use karoo::{Coordinates, Geolocator, LocationError, PermissionState};

/// Geolocation of the current browser tab
#[derive(Clone, Copy, Default)]
pub struct BrowserGeolocator;

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

fn has_geolocation(navigator: &web_sys::Navigator) -> bool {
    Reflect::get(navigator, &JsValue::from_str("geolocation"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Readable text out of a thrown JS value or `GeolocationPositionError`
fn js_message(value: &JsValue) -> String {
    get(value, "message")
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Map the `state` string of a `PermissionStatus`
///
/// Unknown states are treated as "ask first".
pub fn parse_permission(state: Option<&str>) -> PermissionState {
    state
        .and_then(|s| s.parse().ok())
        .unwrap_or(PermissionState::Prompt)
}

#[async_trait(?Send)]
impl Geolocator for BrowserGeolocator {
    async fn permission(&self) -> PermissionState {
        let Some(navigator) = navigator().filter(has_geolocation) else {
            return PermissionState::Unsupported;
        };

        // Without the Permissions API the position request itself asks.
        let Ok(permissions) = navigator.permissions() else {
            return PermissionState::Prompt;
        };

        let descriptor = Object::new();
        if Reflect::set(
            &descriptor,
            &JsValue::from_str("name"),
            &JsValue::from_str("geolocation"),
        )
        .is_err()
        {
            return PermissionState::Prompt;
        }

        let status = match permissions.query(&descriptor) {
            Ok(promise) => JsFuture::from(promise).await,
            Err(e) => Err(e),
        };

        match status {
            Ok(status) => {
                let state = get(&status, "state").and_then(|s| s.as_string());
                parse_permission(state.as_deref())
            }
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Permission query failed: {}", js_message(&e)).into(),
                );
                PermissionState::Prompt
            }
        }
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let navigator = navigator()
            .filter(has_geolocation)
            .ok_or(LocationError::Unsupported)?;
        let geolocation = navigator
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        let request = Promise::new(&mut |resolve, reject| {
            if let Err(e) =
                geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
            {
                let _ = reject.call1(&JsValue::NULL, &e);
            }
        });

        let position = JsFuture::from(request)
            .await
            .map_err(|e| LocationError::Position(js_message(&e)))?;

        let coords = get(&position, "coords")
            .ok_or_else(|| LocationError::Position("position has no coordinates".to_string()))?;

        match (
            get(&coords, "latitude").and_then(|v| v.as_f64()),
            get(&coords, "longitude").and_then(|v| v.as_f64()),
        ) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(LocationError::Position(
                "position has no coordinates".to_string(),
            )),
        }
    }
}
