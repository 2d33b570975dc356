use crate::{workout::Workout, workout_store::WorkoutStore};

/// Something clicked inside the workout list.
pub trait ClickTarget {
    /// Id of the nearest enclosing workout row, if the click landed in one.
    fn enclosing_row_id(&self) -> Option<String>;
}

pub fn resolve<'a>(store: &'a WorkoutStore, target: &dyn ClickTarget) -> Option<&'a Workout> {
    let id = target.enclosing_row_id()?;
    let workout = store.find_by_id(&id);
    if workout.is_none() {
        tracing::debug!("No workout with id {id}");
    }
    workout
}
