#![warn(clippy::pedantic)]

pub mod exercise_builder;
pub mod log;
pub mod log_workout;

pub use exercise_builder::ExerciseBuilderForm;
pub use log_workout::{AdHocExercise, LogWorkoutError, LogWorkoutForm, LoggedWorkout};
