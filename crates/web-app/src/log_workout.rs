use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};

use fittrack_domain::{ExerciseID, Name, Notes, NotesError};

/// Flat contribution credited for each selected catalog exercise. The
/// catalog carries no per-exercise duration or calorie data.
pub const CATALOG_EXERCISE_DURATION: u32 = 15;
pub const CATALOG_EXERCISE_CALORIES: u32 = 100;

/// Delay in milliseconds before the UI navigates to the progress page
/// after a successful submission.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Form state of the workout logger: a date, a toggled selection of
/// catalog exercises, ad-hoc entries and free-text notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogWorkoutForm {
    pub date: NaiveDate,
    selected: BTreeSet<ExerciseID>,
    entries: Vec<AdHocExercise>,
    pub notes: String,
}

/// A logger-local exercise entry that is not drawn from the catalog. It
/// has no identity beyond the current form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdHocExercise {
    pub name: Name,
    pub duration: u32,
    pub calories: u32,
}

/// Confirmation summary returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedWorkout {
    pub date: NaiveDate,
    pub exercises: usize,
    pub duration: u32,
    pub calories: u32,
    pub notes: Notes,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LogWorkoutError {
    #[error("Select at least one exercise")]
    NoExercises,
    #[error("Duration must be greater than 0")]
    NoDuration,
    #[error(transparent)]
    Notes(#[from] NotesError),
}

impl LogWorkoutForm {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            selected: BTreeSet::new(),
            entries: vec![],
            notes: String::new(),
        }
    }

    pub fn toggle_exercise(&mut self, id: ExerciseID) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &ExerciseID) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<ExerciseID> {
        &self.selected
    }

    pub fn add_entry(&mut self, entry: AdHocExercise) {
        self.entries.push(entry);
    }

    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[AdHocExercise] {
        &self.entries
    }

    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.selected.len() as u32 * CATALOG_EXERCISE_DURATION
            + self.entries.iter().map(|e| e.duration).sum::<u32>()
    }

    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn total_calories(&self) -> u32 {
        self.selected.len() as u32 * CATALOG_EXERCISE_CALORIES
            + self.entries.iter().map(|e| e.calories).sum::<u32>()
    }

    /// All validation errors of the current state, for inline display
    /// next to the offending fields. An empty result permits submission.
    #[must_use]
    pub fn errors(&self) -> Vec<LogWorkoutError> {
        let mut errors = vec![];

        if self.selected.is_empty() && self.entries.is_empty() {
            errors.push(LogWorkoutError::NoExercises);
        }
        if self.total_duration() == 0 {
            errors.push(LogWorkoutError::NoDuration);
        }
        if let Err(err) = Notes::new(&self.notes) {
            errors.push(err.into());
        }

        errors
    }

    /// Validates the form, returns the confirmation summary and resets
    /// all form state to a fresh form dated today.
    ///
    /// No progress log is appended to any store: the flow only confirms
    /// the submission. This reproduces a functional gap in the logging
    /// feature rather than inventing persistence semantics for it.
    pub fn submit(&mut self) -> Result<LoggedWorkout, Vec<LogWorkoutError>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let notes = Notes::new(&self.notes).map_err(|err| vec![LogWorkoutError::from(err)])?;
        let logged = LoggedWorkout {
            date: self.date,
            exercises: self.selected.len() + self.entries.len(),
            duration: self.total_duration(),
            calories: self.total_calories(),
            notes,
        };

        *self = Self::default();

        Ok(logged)
    }
}

impl Default for LogWorkoutForm {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ad_hoc(name: &str, duration: u32, calories: u32) -> AdHocExercise {
        AdHocExercise {
            name: Name::new(name).unwrap(),
            duration,
            calories,
        }
    }

    fn form() -> LogWorkoutForm {
        LogWorkoutForm::new(NaiveDate::from_ymd_opt(2024, 9, 28).unwrap())
    }

    #[test]
    fn test_toggle_exercise() {
        let mut form = form();

        form.toggle_exercise("ex1".into());
        assert!(form.is_selected(&"ex1".into()));

        form.toggle_exercise("ex1".into());
        assert!(!form.is_selected(&"ex1".into()));
        assert!(form.selected().is_empty());
    }

    #[test]
    fn test_add_and_remove_entries() {
        let mut form = form();

        form.add_entry(ad_hoc("Stretching", 10, 30));
        form.add_entry(ad_hoc("Jump Rope", 5, 60));
        form.remove_entry(0);
        form.remove_entry(7);

        assert_eq!(form.entries(), &[ad_hoc("Jump Rope", 5, 60)]);
    }

    #[rstest]
    #[case::catalog_only(&["ex1", "ex2"], &[], 30, 200)]
    #[case::ad_hoc_only(&[], &[(20, 150)], 20, 150)]
    #[case::mixed(&["ex1", "ex2"], &[(20, 150)], 50, 350)]
    fn test_totals(
        #[case] selected: &[&str],
        #[case] entries: &[(u32, u32)],
        #[case] expected_duration: u32,
        #[case] expected_calories: u32,
    ) {
        let mut form = form();
        for id in selected {
            form.toggle_exercise((*id).into());
        }
        for (duration, calories) in entries {
            form.add_entry(ad_hoc("Extra", *duration, *calories));
        }

        assert_eq!(form.total_duration(), expected_duration);
        assert_eq!(form.total_calories(), expected_calories);
    }

    #[test]
    fn test_errors_empty_form() {
        assert_eq!(
            form().errors(),
            vec![LogWorkoutError::NoExercises, LogWorkoutError::NoDuration]
        );
    }

    #[test]
    fn test_errors_zero_duration_entry() {
        let mut form = form();
        form.add_entry(ad_hoc("Stretching", 0, 30));

        assert_eq!(form.errors(), vec![LogWorkoutError::NoDuration]);
    }

    #[test]
    fn test_errors_notes_too_long() {
        let mut form = form();
        form.toggle_exercise("ex1".into());
        form.notes = "x".repeat(501);

        assert_eq!(
            form.errors(),
            vec![LogWorkoutError::Notes(NotesError::TooLong(501))]
        );
    }

    #[test]
    fn test_submit_blocked_by_errors() {
        let mut form = form();
        let date = form.date;

        assert!(form.submit().is_err());
        // an invalid submission must not reset the form
        assert_eq!(form.date, date);
    }

    #[test]
    fn test_submit_returns_summary_and_resets() {
        let mut form = form();
        form.toggle_exercise("ex1".into());
        form.toggle_exercise("ex2".into());
        form.add_entry(ad_hoc("Extra", 20, 150));
        form.notes = "Felt great".to_string();

        let logged = form.submit().unwrap();

        assert_eq!(
            logged,
            LoggedWorkout {
                date: NaiveDate::from_ymd_opt(2024, 9, 28).unwrap(),
                exercises: 3,
                duration: 50,
                calories: 350,
                notes: Notes::new("Felt great").unwrap(),
            }
        );
        assert!(form.selected().is_empty());
        assert!(form.entries().is_empty());
        assert_eq!(form.notes, "");
    }
}
