use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exercise record stored in redb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Owning user ID
    pub user_id: String,
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// When the exercise happened (Unix timestamp, milliseconds)
    pub date: i64,
}

impl ExerciseRecord {
    pub fn new(
        user_id: impl Into<String>,
        description: impl Into<String>,
        duration: i64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            description: description.into(),
            duration,
            date: date.timestamp_millis(),
        }
    }

    /// Stored date as a UTC instant
    pub fn date(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.date).unwrap_or_default()
    }

    /// Parse a duration in whole minutes; negative values are rejected
    pub fn parse_duration(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok().filter(|minutes| *minutes >= 0)
    }
}

/// Form fields accepted when logging an exercise
#[derive(Debug, Default, Deserialize)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Response for a freshly logged exercise
#[derive(Debug, Clone, Serialize)]
pub struct LoggedExercise {
    pub username: String,
    /// ID of the owning user
    pub id: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}
