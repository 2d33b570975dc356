use gloo_console::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use workout_tracker_lib::{navigation::ClickTarget, surface::AlertSurface, TrackerConfig};

pub fn load_config() -> TrackerConfig {
    match TrackerConfig::bundled() {
        Ok(config) => config,
        Err(err) => {
            warn!(format!("Using default configuration: {err}"));
            TrackerConfig::default()
        }
    }
}

/// Blocking `window.alert`.
#[derive(Debug, Default)]
pub struct BrowserAlerts;

impl AlertSurface for BrowserAlerts {
    fn alert(&mut self, message: &str) {
        if let Err(err) = gloo_utils::window().alert_with_message(message) {
            error!("Failed to show alert", err);
        }
    }
}

/// Element a click inside the workout list originated from.
pub struct DomTarget(Option<Element>);

impl DomTarget {
    pub fn from_event(event: &MouseEvent) -> Self {
        Self(event.target().and_then(|target| target.dyn_into::<Element>().ok()))
    }
}

impl ClickTarget for DomTarget {
    fn enclosing_row_id(&self) -> Option<String> {
        let row = self.0.as_ref()?.closest(".workout").ok().flatten()?;
        row.get_attribute("data-id")
    }
}
