use uuid::Uuid;

use crate::constants::{ERR_DESCRIPTION_REQUIRED, ERR_DURATION_INVALID};
use crate::dates::{format_date, normalize_date};
use crate::db::{encode, get_record, tables, Db};
use crate::error::{AppError, Result};
use crate::models::{ExerciseRecord, LoggedExercise, NewExercise, UserRecord};

/// Records exercises against existing users
#[derive(Clone)]
pub struct ExerciseService {
    db: Db,
}

impl ExerciseService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Log an exercise for `user_id`
    ///
    /// The owner lookup and both inserts share one write transaction, so a
    /// missing user leaves the store untouched.
    pub async fn log_exercise(&self, user_id: &str, input: NewExercise) -> Result<LoggedExercise> {
        let description = input
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| AppError::Validation(ERR_DESCRIPTION_REQUIRED.to_string()))?;

        let duration = input
            .duration
            .as_deref()
            .and_then(ExerciseRecord::parse_duration)
            .ok_or_else(|| AppError::Validation(ERR_DURATION_INVALID.to_string()))?;

        let date = normalize_date(input.date.as_deref()).map_err(|e| {
            tracing::warn!("Rejected exercise for user {}: {}", user_id, e);
            e
        })?;

        let record = ExerciseRecord::new(user_id, description, duration, date);
        let db = self.db.clone();
        let owner_id = user_id.to_string();

        let (username, record) =
            tokio::task::spawn_blocking(move || -> Result<(String, ExerciseRecord)> {
                let exercise_id = Uuid::new_v4().to_string();
                let bytes = encode(&record)?;

                let write_txn = db.begin_write()?;
                let username = {
                    let users = write_txn.open_table(tables::USERS)?;
                    let user: UserRecord = get_record(&users, &owner_id)?.ok_or_else(|| {
                        tracing::warn!("Exercise logged for non-existent user: {}", owner_id);
                        AppError::UserNotFound
                    })?;
                    user.username
                };

                {
                    let mut exercises = write_txn.open_table(tables::EXERCISES)?;
                    exercises.insert(exercise_id.as_str(), bytes.as_slice())?;
                }

                {
                    let mut index = write_txn.open_table(tables::USER_EXERCISES)?;
                    let mut ids: Vec<String> =
                        get_record(&index, &owner_id)?.unwrap_or_default();
                    ids.push(exercise_id);
                    let ids_bytes = encode(&ids)?;
                    index.insert(owner_id.as_str(), ids_bytes.as_slice())?;
                }
                write_txn.commit()?;

                Ok((username, record))
            })
            .await??;

        tracing::info!(
            "Exercise logged for user {}: {} ({} min)",
            record.user_id,
            record.description,
            record.duration
        );

        Ok(LoggedExercise {
            username,
            date: format_date(record.date()),
            id: record.user_id,
            description: record.description,
            duration: record.duration,
        })
    }
}
