use log::error;

use crate::{
    CreateError, CustomExerciseRepository, Exercise, ExerciseID, ProgressLog, ReadError, Summary,
    User, Workout, progress, samples,
};

pub trait CatalogService {
    /// The merged exercise catalog: built-in entries first, user-created
    /// entries appended in creation order.
    fn get_catalog(&self) -> Result<Vec<Exercise>, ReadError>;
    fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError>;
}

pub trait ExerciseService {
    fn create_custom_exercise(&self, exercise: Exercise) -> Result<Exercise, CreateError>;
}

pub trait ProgressService {
    fn get_current_user(&self) -> Result<User, ReadError>;
    fn get_progress_summary(&self) -> Summary;
    fn get_recent_activity(&self) -> Vec<(&'static ProgressLog, &'static Workout)>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: CustomExerciseRepository> CatalogService for Service<R> {
    fn get_catalog(&self) -> Result<Vec<Exercise>, ReadError> {
        let custom = log_on_error!(
            self.repository.read_exercises(),
            "read",
            "custom exercises"
        )?;
        Ok(samples::EXERCISES.iter().cloned().chain(custom).collect())
    }

    fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        self.get_catalog()?
            .into_iter()
            .find(|e| e.id == *id)
            .ok_or(ReadError::NotFound)
    }
}

impl<R: CustomExerciseRepository> ExerciseService for Service<R> {
    fn create_custom_exercise(&self, exercise: Exercise) -> Result<Exercise, CreateError> {
        let mut exercises = self.repository.read_exercises()?;
        exercises.push(exercise.clone());
        log_on_error!(
            self.repository.write_exercises(&exercises),
            "create",
            "custom exercise"
        )?;
        Ok(exercise)
    }
}

impl<R> ProgressService for Service<R> {
    fn get_current_user(&self) -> Result<User, ReadError> {
        samples::USERS
            .iter()
            .find(|u| u.id == *samples::CURRENT_USER_ID)
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    fn get_progress_summary(&self) -> Summary {
        progress::summary(
            samples::PROGRESS_LOGS
                .iter()
                .filter(|l| l.user_id == *samples::CURRENT_USER_ID),
        )
    }

    fn get_recent_activity(&self) -> Vec<(&'static ProgressLog, &'static Workout)> {
        progress::recent_activity(
            samples::PROGRESS_LOGS
                .iter()
                .filter(|l| l.user_id == *samples::CURRENT_USER_ID),
            &samples::WORKOUTS,
        )
    }
}
