//! Projections of a workout into what the map and the list display.

use serde::Serialize;

use crate::workout::{Coordinates, Metrics, Workout, WorkoutId, WorkoutKind};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MarkerView {
    pub coordinates: Coordinates,
    pub popup_text: String,
    pub popup_class: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RowDetail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WorkoutRow {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<RowDetail>,
}

impl WorkoutRow {
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.kind.slug())
    }
}

pub fn marker_view(workout: &Workout) -> MarkerView {
    let kind = workout.kind();
    MarkerView {
        coordinates: workout.coordinates(),
        popup_text: format!("{} {}", kind.icon(), workout.description()),
        popup_class: format!("{}-popup", kind.slug()),
    }
}

pub fn workout_row(workout: &Workout) -> WorkoutRow {
    let kind = workout.kind();
    let detail = |icon, value: String, unit| RowDetail { icon, value, unit };

    let mut details = vec![
        detail(kind.icon(), workout.distance_km().to_string(), "km"),
        detail("⏱", workout.duration_min().to_string(), "min"),
    ];

    match *workout.metrics() {
        Metrics::Running { cadence_spm, pace_min_per_km } => {
            details.push(detail("⚡️", format!("{pace_min_per_km:.1}"), "min/km"));
            details.push(detail("🦶🏼", cadence_spm.to_string(), "spm"));
        }
        Metrics::Cycling { elevation_gain_m, speed_km_per_h } => {
            details.push(detail("⚡️", format!("{speed_km_per_h:.1}"), "km/h"));
            details.push(detail("⛰", elevation_gain_m.to_string(), "m"));
        }
    }

    WorkoutRow {
        id: workout.id().clone(),
        kind,
        title: workout.description().to_owned(),
        details,
    }
}
