use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 2] = [WorkoutKind::Running, WorkoutKind::Cycling];

    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Lowercase name used as form value and CSS modifier.
    pub fn slug(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(TrackerError::UnknownWorkoutKind(other.to_owned())),
        }
    }
}

/// The discipline-specific measurement supplied when a workout is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discipline {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

/// Discipline measurement together with its derived metric.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metrics {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    metrics: Metrics,
    description: String,
}

impl Workout {
    /// Builds a fully derived workout. Input is expected to be validated already.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        discipline: Discipline,
    ) -> Self {
        let metrics = match discipline {
            Discipline::Running { cadence_spm } => Metrics::Running {
                cadence_spm,
                pace_min_per_km: duration_min / distance_km,
            },
            Discipline::Cycling { elevation_gain_m } => Metrics::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / (duration_min / 60.),
            },
        };

        let kind = match metrics {
            Metrics::Running { .. } => WorkoutKind::Running,
            Metrics::Cycling { .. } => WorkoutKind::Cycling,
        };
        let description = format!("{} on {}", kind.label(), created_at.format("%B %-d"));

        Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            metrics,
            description,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.metrics {
            Metrics::Running { .. } => WorkoutKind::Running,
            Metrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace for running, speed for cycling.
    pub fn primary_metric(&self) -> f64 {
        match self.metrics {
            Metrics::Running { pace_min_per_km, .. } => pace_min_per_km,
            Metrics::Cycling { speed_km_per_h, .. } => speed_km_per_h,
        }
    }

    pub fn primary_metric_unit(&self) -> &'static str {
        match self.metrics {
            Metrics::Running { .. } => "min/km",
            Metrics::Cycling { .. } => "km/h",
        }
    }

    /// Cadence for running, elevation gain for cycling.
    pub fn secondary_metric(&self) -> f64 {
        match self.metrics {
            Metrics::Running { cadence_spm, .. } => cadence_spm,
            Metrics::Cycling { elevation_gain_m, .. } => elevation_gain_m,
        }
    }

    pub fn secondary_metric_unit(&self) -> &'static str {
        match self.metrics {
            Metrics::Running { .. } => "spm",
            Metrics::Cycling { .. } => "m",
        }
    }
}
