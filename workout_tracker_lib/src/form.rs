use std::fmt;

use chrono::{DateTime, Local};

use crate::{
    error::TrackerError,
    source::IdGenerator,
    workout::{Coordinates, Discipline, Workout, WorkoutKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    AwaitingInput { at: Coordinates },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::Distance => "distance",
            FormField::Duration => "duration",
            FormField::Cadence => "cadence",
            FormField::Elevation => "elevation",
        })
    }
}

/// Raw text of the form inputs as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl FormDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::Elevation => &self.elevation,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Distance => &mut self.distance,
            FormField::Duration => &mut self.duration,
            FormField::Cadence => &mut self.cadence,
            FormField::Elevation => &mut self.elevation,
        }
    }

    /// Empties the numeric inputs. The selected type stays.
    fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub distance_km: f64,
    pub duration_min: f64,
    pub discipline: Discipline,
}

#[derive(Debug, Default)]
pub struct FormController {
    state: FormState,
    draft: FormDraft,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::AwaitingInput { .. })
    }

    pub fn pending_coordinates(&self) -> Option<Coordinates> {
        match self.state {
            FormState::AwaitingInput { at } => Some(at),
            FormState::Idle => None,
        }
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// The discipline-specific input currently shown.
    pub fn secondary_field(&self) -> FormField {
        match self.draft.kind {
            WorkoutKind::Running => FormField::Cadence,
            WorkoutKind::Cycling => FormField::Elevation,
        }
    }

    pub fn open(&mut self, at: Coordinates) {
        tracing::debug!("Workout form opened at {:?}", at);
        self.state = FormState::AwaitingInput { at };
    }

    /// Kept even while the form is hidden so the type select never disagrees
    /// with the draft.
    pub fn select_kind(&mut self, kind: WorkoutKind) {
        self.draft.kind = kind;
    }

    pub fn set_field(&mut self, field: FormField, raw: impl Into<String>) {
        *self.draft.field_mut(field) = raw.into();
    }

    pub fn cancel(&mut self) {
        self.draft.clear();
        self.state = FormState::Idle;
    }

    /// Validates the draft and builds a workout at the captured coordinate.
    /// On failure the form stays open with its input untouched.
    pub fn submit(&mut self, ids: &mut dyn IdGenerator, now: DateTime<Local>) -> Result<Workout, TrackerError> {
        let FormState::AwaitingInput { at } = self.state else {
            return Err(TrackerError::FormClosed);
        };

        let input = validate(&self.draft)?;
        let workout = Workout::new(ids.next_id(), now, at, input.distance_km, input.duration_min, input.discipline);

        self.draft.clear();
        self.state = FormState::Idle;
        Ok(workout)
    }
}

/// Blank input counts as zero; anything else that does not parse is NaN.
fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.;
    }
    raw.parse().unwrap_or(f64::NAN)
}

fn read(draft: &FormDraft, field: FormField) -> Result<f64, TrackerError> {
    let value = parse_number(draft.field(field));
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackerError::InvalidWorkoutInput { field })
    }
}

fn positive(value: f64, field: FormField) -> Result<f64, TrackerError> {
    if value > 0. {
        Ok(value)
    } else {
        Err(TrackerError::InvalidWorkoutInput { field })
    }
}

/// Running needs distance, duration and cadence positive. Cycling only needs
/// distance and duration positive; elevation just has to be a number.
/// Fields are checked in form order, so the first bad one is reported.
pub fn validate(draft: &FormDraft) -> Result<ValidatedInput, TrackerError> {
    let distance = positive(read(draft, FormField::Distance)?, FormField::Distance)?;
    let duration = positive(read(draft, FormField::Duration)?, FormField::Duration)?;

    let discipline = match draft.kind {
        WorkoutKind::Running => Discipline::Running {
            cadence_spm: positive(read(draft, FormField::Cadence)?, FormField::Cadence)?,
        },
        WorkoutKind::Cycling => {
            let elevation = read(draft, FormField::Elevation)?;
            if elevation < 0. {
                tracing::warn!("Accepting negative elevation gain {elevation} m for cycling workout");
            }
            Discipline::Cycling { elevation_gain_m: elevation }
        }
    };

    Ok(ValidatedInput {
        distance_km: distance,
        duration_min: duration,
        discipline,
    })
}
