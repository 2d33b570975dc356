use thiserror::Error;

use crate::form::FormField;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Geolocation is not supported by this browser, so the map cannot be shown.")]
    GeolocationUnavailable,
    #[error("Could not fetch your location! ({0})")]
    GeolocationDenied(String),
    #[error("Input must be a positive number.")]
    InvalidWorkoutInput { field: FormField },
    #[error("the map has not been loaded yet")]
    MapUnavailable,
    #[error("no workout form is open")]
    FormClosed,
    #[error("unknown workout type: {0}")]
    UnknownWorkoutKind(String),
    #[error("invalid tracker configuration: {0}")]
    Config(#[from] serde_json::Error),
}
