//! The built-in sample dataset seeding the exercise catalog, the workout
//! list and the progress dashboard. Read-only; user-created exercises live
//! in a separate persisted collection and are merged at read time.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::{
    Category, Difficulty, Exercise, Name, Notes, ProgressLog, User, UserID, Workout,
};

/// The user treated as logged in by the progress dashboard.
pub static CURRENT_USER_ID: LazyLock<UserID> = LazyLock::new(|| "1".into());

pub static USERS: LazyLock<Vec<User>> = LazyLock::new(|| {
    vec![
        User {
            id: "1".into(),
            name: Name::new("John Doe").unwrap(),
            email: "john@example.com".to_string(),
            password: "password123".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            goals: "Build muscle and increase strength".to_string(),
        },
        User {
            id: "2".into(),
            name: Name::new("Jane Smith").unwrap(),
            email: "jane@example.com".to_string(),
            password: "password123".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            goals: "Improve cardiovascular fitness".to_string(),
        },
    ]
});

pub static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    vec![
        exercise(
            "ex1",
            "Bench Press",
            Category::Strength,
            Difficulty::Intermediate,
            "A compound upper body exercise that primarily targets the chest muscles.",
            &["Chest", "Triceps", "Shoulders"],
            &["Barbell", "Bench"],
            &[
                "Lie flat on the bench with feet firmly on the ground",
                "Grip the bar slightly wider than shoulder width",
                "Lower the bar to your chest in a controlled manner",
                "Press the bar back up to starting position",
                "Repeat for desired reps",
            ],
        ),
        exercise(
            "ex2",
            "Squats",
            Category::Strength,
            Difficulty::Intermediate,
            "A fundamental compound exercise that targets the lower body.",
            &["Quadriceps", "Glutes", "Hamstrings", "Core"],
            &["Barbell", "Squat Rack"],
            &[
                "Position the bar on your upper back",
                "Stand with feet shoulder-width apart",
                "Lower your body by bending your knees and hips",
                "Go down until thighs are parallel to the ground",
                "Drive through your heels to return to starting position",
            ],
        ),
        exercise(
            "ex3",
            "Running",
            Category::Cardio,
            Difficulty::Beginner,
            "Classic cardiovascular exercise that improves endurance and burns calories.",
            &["Legs", "Core", "Cardiovascular System"],
            &["Running Shoes"],
            &[
                "Start with a 5-minute warm-up walk",
                "Begin running at a comfortable pace",
                "Maintain proper form with upright posture",
                "Breathe rhythmically",
                "Cool down with a 5-minute walk",
            ],
        ),
        exercise(
            "ex4",
            "Deadlifts",
            Category::Strength,
            Difficulty::Advanced,
            "A powerful full-body compound exercise focusing on the posterior chain.",
            &["Back", "Glutes", "Hamstrings", "Core", "Forearms"],
            &["Barbell", "Weight Plates"],
            &[
                "Stand with feet hip-width apart, bar over mid-foot",
                "Bend at the hips and knees to grip the bar",
                "Keep your back straight and chest up",
                "Drive through your heels to lift the bar",
                "Stand up fully, then lower the bar in a controlled manner",
            ],
        ),
        exercise(
            "ex5",
            "Push-ups",
            Category::Strength,
            Difficulty::Beginner,
            "A classic bodyweight exercise for upper body strength.",
            &["Chest", "Triceps", "Shoulders", "Core"],
            &["None"],
            &[
                "Start in a plank position with hands shoulder-width apart",
                "Lower your body until chest nearly touches the ground",
                "Keep your body in a straight line",
                "Push back up to starting position",
                "Repeat for desired reps",
            ],
        ),
        exercise(
            "ex6",
            "Yoga Sun Salutation",
            Category::Flexibility,
            Difficulty::Beginner,
            "A flowing sequence of poses that warms up the body and improves flexibility.",
            &["Full Body", "Core", "Flexibility"],
            &["Yoga Mat"],
            &[
                "Start in mountain pose",
                "Raise arms overhead",
                "Forward fold to touch toes",
                "Step back to plank position",
                "Lower to cobra pose",
                "Push up to downward dog",
                "Step forward and return to standing",
            ],
        ),
        exercise(
            "ex7",
            "Burpees",
            Category::Cardio,
            Difficulty::Intermediate,
            "High-intensity full-body exercise that combines strength and cardio.",
            &["Full Body", "Cardiovascular System"],
            &["None"],
            &[
                "Start standing",
                "Drop into a squat position with hands on the ground",
                "Kick feet back into plank position",
                "Perform a push-up",
                "Jump feet back to squat position",
                "Jump up with arms overhead",
            ],
        ),
        exercise(
            "ex8",
            "Plank",
            Category::Strength,
            Difficulty::Beginner,
            "An isometric core exercise that builds endurance and stability.",
            &["Core", "Shoulders", "Back"],
            &["None"],
            &[
                "Start in a forearm plank position",
                "Keep body in a straight line from head to heels",
                "Engage your core",
                "Hold the position",
                "Breathe steadily",
            ],
        ),
    ]
});

pub static WORKOUTS: LazyLock<Vec<Workout>> = LazyLock::new(|| {
    vec![
        workout(
            "w1",
            "Upper Body Blast",
            Category::Strength,
            45,
            Difficulty::Intermediate,
            &["ex1", "ex5"],
            "Intense upper body workout focusing on chest, shoulders, and arms.",
            350,
        ),
        workout(
            "w2",
            "Leg Day Power",
            Category::Strength,
            60,
            Difficulty::Intermediate,
            &["ex2", "ex4"],
            "Build powerful legs with squats and deadlifts.",
            450,
        ),
        workout(
            "w3",
            "Cardio Burn",
            Category::Cardio,
            30,
            Difficulty::Beginner,
            &["ex3", "ex7"],
            "Get your heart pumping with this cardio-focused workout.",
            400,
        ),
        workout(
            "w4",
            "Flexibility Flow",
            Category::Flexibility,
            45,
            Difficulty::Beginner,
            &["ex6"],
            "Improve flexibility and reduce stress with yoga.",
            200,
        ),
        workout(
            "w5",
            "Full Body Strength",
            Category::Strength,
            60,
            Difficulty::Advanced,
            &["ex2", "ex4", "ex1"],
            "Complete full body strength training for maximum gains.",
            500,
        ),
        workout(
            "w6",
            "HIIT Cardio",
            Category::Cardio,
            25,
            Difficulty::Intermediate,
            &["ex7"],
            "High-intensity interval training to maximize calorie burn.",
            450,
        ),
        workout(
            "w7",
            "Core Crusher",
            Category::Strength,
            30,
            Difficulty::Beginner,
            &["ex8", "ex5"],
            "Strengthen your core with targeted exercises.",
            250,
        ),
        workout(
            "w8",
            "Endurance Run",
            Category::Cardio,
            45,
            Difficulty::Intermediate,
            &["ex3"],
            "Build cardiovascular endurance with steady-state running.",
            500,
        ),
    ]
});

pub static PROGRESS_LOGS: LazyLock<Vec<ProgressLog>> = LazyLock::new(|| {
    vec![
        progress_log(
            "p1",
            "w1",
            NaiveDate::from_ymd_opt(2024, 9, 28).unwrap(),
            45,
            350,
            "Great workout! Felt strong today.",
        ),
        progress_log(
            "p2",
            "w2",
            NaiveDate::from_ymd_opt(2024, 9, 26).unwrap(),
            60,
            450,
            "Legs are sore but it was worth it!",
        ),
        progress_log(
            "p3",
            "w3",
            NaiveDate::from_ymd_opt(2024, 9, 25).unwrap(),
            30,
            400,
            "Quick and effective cardio session.",
        ),
        progress_log(
            "p4",
            "w5",
            NaiveDate::from_ymd_opt(2024, 9, 23).unwrap(),
            60,
            500,
            "Challenging full body workout!",
        ),
        progress_log(
            "p5",
            "w7",
            NaiveDate::from_ymd_opt(2024, 9, 22).unwrap(),
            30,
            250,
            "Core feels stronger every day.",
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    category: Category,
    difficulty: Difficulty,
    description: &str,
    target_muscles: &[&str],
    equipment: &[&str],
    instructions: &[&str],
) -> Exercise {
    Exercise {
        id: id.into(),
        name: Name::new(name).unwrap(),
        category,
        difficulty,
        description: description.to_string(),
        target_muscles: strings(target_muscles),
        equipment: strings(equipment),
        instructions: strings(instructions),
        sets: None,
        reps: None,
        duration: None,
        calories: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn workout(
    id: &str,
    name: &str,
    category: Category,
    duration: u32,
    difficulty: Difficulty,
    exercises: &[&str],
    description: &str,
    calories: u32,
) -> Workout {
    Workout {
        id: id.into(),
        name: Name::new(name).unwrap(),
        category,
        duration,
        difficulty,
        exercises: exercises.iter().map(|id| (*id).into()).collect(),
        description: description.to_string(),
        calories,
    }
}

fn progress_log(
    id: &str,
    workout_id: &str,
    date: NaiveDate,
    duration: u32,
    calories: u32,
    notes: &str,
) -> ProgressLog {
    ProgressLog {
        id: id.into(),
        user_id: CURRENT_USER_ID.clone(),
        workout_id: workout_id.into(),
        date,
        duration,
        calories,
        notes: Notes::new(notes).unwrap(),
        completed: true,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_exercise_ids_unique() {
        let mut ids = HashSet::new();

        for exercise in EXERCISES.iter() {
            assert!(ids.insert(exercise.id.clone()), "duplicate {}", exercise.id);
        }
    }

    #[test]
    fn test_workout_exercises_resolve() {
        for workout in WORKOUTS.iter() {
            assert!(!workout.exercises.is_empty());
            for id in &workout.exercises {
                assert!(
                    EXERCISES.iter().any(|e| e.id == *id),
                    "dangling exercise {id} in {}",
                    workout.id
                );
            }
        }
    }

    #[test]
    fn test_progress_logs_resolve() {
        for log in PROGRESS_LOGS.iter() {
            assert!(USERS.iter().any(|u| u.id == log.user_id));
            assert!(WORKOUTS.iter().any(|w| w.id == log.workout_id));
        }
    }

    #[test]
    fn test_current_user_exists() {
        assert!(USERS.iter().any(|u| u.id == *CURRENT_USER_ID));
    }
}
