use serde::{Deserialize, Serialize};

use fittrack_domain as domain;

/// Persisted shape of a custom exercise. One JSON array of these records
/// is stored under the custom exercise key; the field names match the
/// original storage layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub description: String,
    pub target_muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    // stored as "caloriesBurned", unlike the other numeric fields
    #[serde(
        rename = "caloriesBurned",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub calories: Option<u32>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Exercise {
            id: value.id.clone().into(),
            name: value.name.to_string(),
            category: value.category.to_string(),
            difficulty: value.difficulty.to_string(),
            description: value.description.clone(),
            target_muscles: value.target_muscles.clone(),
            equipment: value.equipment.clone(),
            instructions: value.instructions.clone(),
            sets: value.sets,
            reps: value.reps,
            duration: value.duration,
            calories: value.calories,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = Error;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(domain::Exercise {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: domain::Category::try_from(value.category.as_str())?,
            difficulty: domain::Difficulty::try_from(value.difficulty.as_str())?,
            description: value.description,
            target_muscles: value.target_muscles,
            equipment: value.equipment,
            instructions: value.instructions,
            sets: value.sets,
            reps: value.reps,
            duration: value.duration,
            calories: value.calories,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Category(#[from] domain::CategoryError),
    #[error(transparent)]
    Difficulty(#[from] domain::DifficultyError),
}
