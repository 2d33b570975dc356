use gloo_console::error;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{
    js_sys::{Function, Reflect},
    Position, PositionError,
};
use workout_tracker_lib::{Coordinates, TrackerError};
use yew::Callback;

/// Asks the browser for the current position once. `on_result` fires exactly
/// once, with the position or the reason it is unavailable.
pub fn request_position(on_result: Callback<Result<Coordinates, TrackerError>>) {
    let navigator = gloo_utils::window().navigator();

    let supported = Reflect::has(&navigator, &"geolocation".into()).unwrap_or(false);
    let geolocation = match navigator.geolocation() {
        Ok(geolocation) if supported => geolocation,
        _ => {
            on_result.emit(Err(TrackerError::GeolocationUnavailable));
            return;
        }
    };

    let on_success = on_result.clone();
    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        on_success.emit(Ok(Coordinates::new(coords.latitude(), coords.longitude())));
    });

    let on_failure = on_result.clone();
    let failure = Closure::once_into_js(move |err: PositionError| {
        on_failure.emit(Err(TrackerError::GeolocationDenied(err.message())));
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref::<Function>(),
        Some(failure.unchecked_ref::<Function>()),
    ) {
        error!("Geolocation request failed", err);
        on_result.emit(Err(TrackerError::GeolocationUnavailable));
    }
}
