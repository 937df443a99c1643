use std::{fmt, slice::Iter};

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Display, Into};

use crate::{Name, ReadError, StorageError};

/// Access to the user-created exercises persisted in the browser.
///
/// The whole collection lives under a single storage key and is rewritten
/// on every change. Last write wins; concurrent writers (e.g. two tabs)
/// are not coordinated.
pub trait CustomExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn write_exercises(&self, exercises: &[Exercise]) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: String,
    pub target_muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub instructions: Vec<String>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
}

impl Exercise {
    /// Case-insensitive substring match against the name, the description
    /// or any target muscle. The query is matched as entered, surrounding
    /// whitespace included.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.as_ref().to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .target_muscles
                .iter()
                .any(|muscle| muscle.to_lowercase().contains(&query))
    }
}

#[derive(AsRef, Debug, Display, Clone, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    /// Identifier for a user-created exercise, derived from the creation
    /// time. Collisions within the same millisecond are theoretical and
    /// not prevented.
    #[must_use]
    pub fn custom(created: DateTime<Utc>) -> Self {
        Self(format!("custom-{}", created.timestamp_millis()))
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.0.starts_with("custom-")
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Category {
    #[default]
    Strength,
    Cardio,
    Flexibility,
    Sports,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 4] = [
            Category::Strength,
            Category::Cardio,
            Category::Flexibility,
            Category::Sports,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
            Category::Sports => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::Strength => "strength",
                Category::Cardio => "cardio",
                Category::Flexibility => "flexibility",
                Category::Sports => "sports",
            }
        )
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "strength" => Ok(Category::Strength),
            "cardio" => Ok(Category::Cardio),
            "flexibility" => Ok(Category::Flexibility),
            "sports" => Ok(Category::Sports),
            _ => Err(CategoryError::Invalid),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Invalid category")]
    Invalid,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Beginner => "beginner",
                Difficulty::Intermediate => "intermediate",
                Difficulty::Advanced => "advanced",
            }
        )
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(DifficultyError::Invalid),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Invalid difficulty")]
    Invalid,
}

/// Filter state of the exercise library view. `None` means "all" for the
/// categorical filters. All three predicates are conjoined.
#[derive(Debug, Default, PartialEq)]
pub struct ExerciseFilter {
    pub search: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                e.matches_search(&self.search)
                    && self.category.is_none_or(|category| e.category == category)
                    && self
                        .difficulty
                        .is_none_or(|difficulty| e.difficulty == difficulty)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.category.is_none() && self.difficulty.is_none()
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter()
            .map(|c| (*c, self.category == Some(*c)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulty == Some(*d)))
            .collect::<Vec<_>>()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_filter() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

/// Estimated calories for a custom exercise without an explicit value.
/// Fixed product heuristic, not a physiological model: duration takes
/// precedence over sets and reps, and 50 is the flat fallback.
#[must_use]
pub fn estimate_calories(duration: Option<u32>, sets: Option<u32>, reps: Option<u32>) -> u32 {
    if let Some(duration) = duration {
        duration * 10
    } else if let (Some(sets), Some(_reps)) = (sets, reps) {
        sets * 20
    } else {
        50
    }
}
