#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod exercise;
pub mod name;
pub mod notes;
pub mod progress;
pub mod samples;
pub mod service;
pub mod user;
pub mod workout;

pub use error::{CreateError, ReadError, StorageError};
pub use exercise::{
    Category, CategoryError, CustomExerciseRepository, Difficulty, DifficultyError, Exercise,
    ExerciseFilter, ExerciseID, Property, estimate_calories,
};
pub use name::{Name, NameError};
pub use notes::{Notes, NotesError};
pub use progress::{ProgressLog, ProgressLogID, Summary};
pub use service::{CatalogService, ExerciseService, ProgressService, Service};
pub use user::{User, UserID};
pub use workout::{Workout, WorkoutID};
