//! Sources of workout identifiers and creation timestamps.

use chrono::{DateTime, Local};

use crate::workout::WorkoutId;

pub trait IdGenerator {
    fn next_id(&mut self) -> WorkoutId;
}

/// Ids of the form `<session>-<n>`. The counter never repeats, so ids are unique
/// for the lifetime of the generator no matter how fast workouts are submitted.
#[derive(Debug, Clone)]
pub struct SessionIds {
    session: String,
    next: u64,
}

impl SessionIds {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            next: 1,
        }
    }

    /// Uses the session start time in milliseconds as prefix.
    pub fn starting_at(start: DateTime<Local>) -> Self {
        Self::new(start.timestamp_millis().to_string())
    }
}

impl IdGenerator for SessionIds {
    fn next_id(&mut self) -> WorkoutId {
        let id = WorkoutId::new(format!("{}-{}", self.session, self.next));
        self.next += 1;
        id
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
