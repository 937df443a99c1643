use std::cell::RefCell;

use fittrack_domain as domain;

/// In-memory stand-in for the browser-backed repository, used by tests
/// and anywhere no `window` exists.
#[derive(Default)]
pub struct InMemory {
    exercises: RefCell<Vec<domain::Exercise>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl domain::CustomExerciseRepository for InMemory {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self.exercises.borrow().clone())
    }

    fn write_exercises(&self, exercises: &[domain::Exercise]) -> Result<(), domain::StorageError> {
        *self.exercises.borrow_mut() = exercises.to_vec();
        Ok(())
    }
}
