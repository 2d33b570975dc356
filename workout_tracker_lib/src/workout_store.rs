use crate::workout::Workout;

/// Workouts recorded during the current session, in insertion order.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, workout: Workout) -> &Workout {
        self.workouts.push(workout);
        &self.workouts[self.workouts.len() - 1]
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id().as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::{tests::running, WorkoutId};

    #[test]
    fn find_returns_matching_workout() {
        let mut store = WorkoutStore::new();
        store.add(running("1", (1., 1.)));
        store.add(running("2", (2., 2.)));
        store.add(running("3", (3., 3.)));

        for (id, lat) in [("1", 1.), ("2", 2.), ("3", 3.)] {
            let found = store.find_by_id(id).unwrap();
            assert_eq!(found.id(), &WorkoutId::new(id));
            assert_eq!(found.coordinates().latitude, lat);
        }
        assert!(store.find_by_id("4").is_none());
        assert!(store.find_by_id("").is_none());
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = WorkoutStore::new();
        assert!(store.is_empty());

        let added = store.add(running("x", (0., 0.))).id().clone();
        store.add(running("y", (0., 0.)));

        assert_eq!(added.as_str(), "x");
        assert_eq!(store.len(), 2);
        let order: Vec<_> = store.iter().map(|w| w.id().as_str()).collect();
        assert_eq!(order, ["x", "y"]);
    }
}
