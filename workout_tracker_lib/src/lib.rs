pub mod config;
pub mod error;
pub mod form;
pub mod navigation;
pub mod render;
pub mod source;
pub mod surface;
pub mod tracker;
pub mod workout;
pub mod workout_store;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use tracker::WorkoutTracker;
pub use workout::{Coordinates, Workout, WorkoutId, WorkoutKind};
