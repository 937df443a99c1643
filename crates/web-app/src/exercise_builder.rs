use chrono::Utc;

use fittrack_domain::{
    Category, Difficulty, Exercise, ExerciseID, Name, NameError, estimate_calories,
};

/// Instruction attached to every user-created exercise. Custom entries
/// carry no step-by-step instructions of their own.
pub const GENERIC_INSTRUCTION: &str = "Perform the exercise with proper form";

/// Muscle group assigned when none is entered.
pub const DEFAULT_TARGET_MUSCLE: &str = "Custom";

/// Form state for creating a custom exercise. Only the name is required;
/// everything else is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseBuilderForm {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub target_muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
}

impl ExerciseBuilderForm {
    /// Builds the exercise record to be appended to the persisted custom
    /// collection. Calories fall back to the fixed heuristic when not
    /// entered explicitly; the identifier derives from the creation time.
    pub fn build(&self) -> Result<Exercise, NameError> {
        let name = Name::new(&self.name)?;

        let target_muscles = if self.target_muscles.is_empty() {
            vec![DEFAULT_TARGET_MUSCLE.to_string()]
        } else {
            self.target_muscles.clone()
        };
        let calories = self
            .calories
            .unwrap_or_else(|| estimate_calories(self.duration, self.sets, self.reps));

        Ok(Exercise {
            id: ExerciseID::custom(Utc::now()),
            name,
            category: self.category,
            difficulty: self.difficulty,
            description: self.description.clone(),
            target_muscles,
            equipment: self.equipment.clone(),
            instructions: vec![GENERIC_INSTRUCTION.to_string()],
            sets: self.sets,
            reps: self.reps,
            duration: self.duration,
            calories: Some(calories),
        })
    }
}
