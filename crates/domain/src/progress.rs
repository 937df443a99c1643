use chrono::NaiveDate;
use derive_more::{AsRef, Display, Into};

use crate::{Notes, UserID, Workout, WorkoutID};

/// Number of entries shown in the recent activity list.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// A completed workout session from the built-in sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressLog {
    pub id: ProgressLogID,
    pub user_id: UserID,
    pub workout_id: WorkoutID,
    pub date: NaiveDate,
    pub duration: u32,
    pub calories: u32,
    pub notes: Notes,
    pub completed: bool,
}

#[derive(AsRef, Debug, Display, Clone, Hash, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgressLogID(String);

impl From<&str> for ProgressLogID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProgressLogID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Aggregate statistics over a user's progress logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub workouts: u32,
    pub minutes: u32,
    pub calories: u32,
    /// Average calories per workout, rounded to the nearest integer. Zero
    /// when there are no logs.
    pub avg_calories: u32,
}

#[must_use]
pub fn summary<'a>(logs: impl Iterator<Item = &'a ProgressLog>) -> Summary {
    let mut workouts = 0;
    let mut minutes = 0;
    let mut calories = 0;

    for log in logs {
        workouts += 1;
        minutes += log.duration;
        calories += log.calories;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let avg_calories = if workouts > 0 {
        (f64::from(calories) / f64::from(workouts)).round() as u32
    } else {
        0
    };

    Summary {
        workouts,
        minutes,
        calories,
        avg_calories,
    }
}

/// The most recent logs, newest first, joined to their workouts. A log
/// whose workout is missing from the sample data is dropped silently.
#[must_use]
pub fn recent_activity<'a>(
    logs: impl Iterator<Item = &'a ProgressLog>,
    workouts: &'a [Workout],
) -> Vec<(&'a ProgressLog, &'a Workout)> {
    let mut logs = logs.collect::<Vec<_>>();
    logs.sort_by(|a, b| b.date.cmp(&a.date));
    logs.into_iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .filter_map(|log| {
            workouts
                .iter()
                .find(|workout| workout.id == log.workout_id)
                .map(|workout| (log, workout))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Category, Difficulty, Name, samples};

    use super::*;

    fn log(id: &str, workout_id: &str, date: NaiveDate, duration: u32, calories: u32) -> ProgressLog {
        ProgressLog {
            id: id.into(),
            user_id: "1".into(),
            workout_id: workout_id.into(),
            date,
            duration,
            calories,
            notes: Notes::default(),
            completed: true,
        }
    }

    fn workout(id: &str) -> Workout {
        Workout {
            id: id.into(),
            name: Name::new("A").unwrap(),
            category: Category::Strength,
            duration: 30,
            difficulty: Difficulty::Beginner,
            exercises: vec![],
            description: String::new(),
            calories: 200,
        }
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary(std::iter::empty()), Summary::default());
    }

    #[rstest]
    #[case(
        &[(45, 350), (60, 450), (30, 400), (60, 500), (30, 250)],
        Summary { workouts: 5, minutes: 225, calories: 1950, avg_calories: 390 }
    )]
    #[case(
        &[(30, 101), (30, 100)],
        Summary { workouts: 2, minutes: 60, calories: 201, avg_calories: 101 }
    )]
    fn test_summary(#[case] logs: &[(u32, u32)], #[case] expected: Summary) {
        let logs = logs
            .iter()
            .enumerate()
            .map(|(i, (duration, calories))| {
                log(
                    &format!("p{i}"),
                    "w1",
                    NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                    *duration,
                    *calories,
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(summary(logs.iter()), expected);
    }

    #[test]
    fn test_summary_sample_data() {
        assert_eq!(
            summary(
                samples::PROGRESS_LOGS
                    .iter()
                    .filter(|l| l.user_id == *samples::CURRENT_USER_ID)
            ),
            Summary {
                workouts: 5,
                minutes: 225,
                calories: 1950,
                avg_calories: 390,
            }
        );
    }

    #[test]
    fn test_recent_activity_sorted_by_date_descending() {
        let workouts = vec![workout("w1"), workout("w2"), workout("w3")];
        let logs = vec![
            log("p1", "w1", NaiveDate::from_ymd_opt(2024, 9, 25).unwrap(), 30, 200),
            log("p2", "w2", NaiveDate::from_ymd_opt(2024, 9, 28).unwrap(), 30, 200),
            log("p3", "w3", NaiveDate::from_ymd_opt(2024, 9, 26).unwrap(), 30, 200),
        ];

        assert_eq!(
            recent_activity(logs.iter(), &workouts)
                .into_iter()
                .map(|(log, _)| log.id.clone())
                .collect::<Vec<_>>(),
            vec!["p2".into(), "p3".into(), "p1".into()]
        );
    }

    #[test]
    fn test_recent_activity_limited_to_five() {
        let workouts = vec![workout("w1")];
        let logs = (1..=7)
            .map(|i| {
                log(
                    &format!("p{i}"),
                    "w1",
                    NaiveDate::from_ymd_opt(2024, 9, i).unwrap(),
                    30,
                    200,
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(recent_activity(logs.iter(), &workouts).len(), 5);
    }

    #[test]
    fn test_recent_activity_skips_missing_workouts() {
        let workouts = vec![workout("w1")];
        let logs = vec![
            log("p1", "w1", NaiveDate::from_ymd_opt(2024, 9, 25).unwrap(), 30, 200),
            log("p2", "w9", NaiveDate::from_ymd_opt(2024, 9, 28).unwrap(), 30, 200),
        ];

        assert_eq!(
            recent_activity(logs.iter(), &workouts)
                .into_iter()
                .map(|(log, _)| log.id.clone())
                .collect::<Vec<_>>(),
            vec!["p1".into()]
        );
    }
}
