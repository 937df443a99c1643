use derive_more::{AsRef, Display, Into};

use crate::{Category, Difficulty, ExerciseID, Name};

/// A predefined workout from the built-in sample data. Read-only; there is
/// no create or edit path for workouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub category: Category,
    pub duration: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<ExerciseID>,
    pub description: String,
    pub calories: u32,
}

#[derive(AsRef, Debug, Display, Clone, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}
