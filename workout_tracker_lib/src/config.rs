use serde::Deserialize;

use crate::error::TrackerError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub zoom_level: f64,
    pub tile_url: String,
    pub attribution: String,
    pub pan_duration_secs: f64,
    /// Delay before the hidden form gets its grid layout back.
    pub form_reveal_delay_ms: u32,
    pub popup: PopupConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            zoom_level: 13.,
            tile_url: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".into(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
            pan_duration_secs: 1.,
            form_reveal_delay_ms: 1000,
            popup: PopupConfig::default(),
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_width: 250.,
            min_width: 100.,
            auto_close: false,
            close_on_click: false,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, TrackerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration shipped with the app.
    pub fn bundled() -> Result<Self, TrackerError> {
        Self::from_json(include_str!("../tracker_config.json"))
    }
}
