use derive_more::{AsRef, Display};

/// Free-text notes attached to a progress log or a logged workout.
#[derive(AsRef, Debug, Default, Display, Clone, PartialEq, Eq)]
pub struct Notes(String);

impl Notes {
    pub const MAX_LEN: usize = 500;

    pub fn new(notes: &str) -> Result<Self, NotesError> {
        let len = notes.chars().count();

        if len > Self::MAX_LEN {
            return Err(NotesError::TooLong(len));
        }

        Ok(Notes(notes.to_string()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NotesError {
    #[error("Notes must be 500 characters or fewer ({0} > 500)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Ok(Notes(String::new())))]
    #[case("Great workout!", Ok(Notes("Great workout!".to_string())))]
    #[case(&"x".repeat(500), Ok(Notes("x".repeat(500))))]
    #[case(&"x".repeat(501), Err(NotesError::TooLong(501)))]
    fn test_notes_new(#[case] notes: &str, #[case] expected: Result<Notes, NotesError>) {
        assert_eq!(Notes::new(notes), expected);
    }

    #[test]
    fn test_notes_is_empty() {
        assert!(Notes::default().is_empty());
        assert!(!Notes::new("a").unwrap().is_empty());
    }
}
