use redb::ReadableTableMetadata;
use serde::Serialize;

use crate::db::{tables, Db};
use crate::error::Result;

/// Number of records removed by a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetSummary {
    pub exercises_deleted: u64,
    pub users_deleted: u64,
}

/// Destructive maintenance operations
#[derive(Clone)]
pub struct AdminService {
    db: Db,
}

impl AdminService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Delete every exercise and every user
    ///
    /// No confirmation or authorization. Calling it on an empty store returns
    /// zero counts.
    pub async fn reset_all(&self) -> Result<ResetSummary> {
        let db = self.db.clone();

        let summary = tokio::task::spawn_blocking(move || -> Result<ResetSummary> {
            let write_txn = db.begin_write()?;
            let summary = {
                let mut exercises = write_txn.open_table(tables::EXERCISES)?;
                let exercises_deleted = exercises.len()?;
                exercises.retain(|_, _| false)?;

                let mut index = write_txn.open_table(tables::USER_EXERCISES)?;
                index.retain(|_, _| false)?;

                let mut users = write_txn.open_table(tables::USERS)?;
                let users_deleted = users.len()?;
                users.retain(|_, _| false)?;

                ResetSummary {
                    exercises_deleted,
                    users_deleted,
                }
            };
            write_txn.commit()?;

            Ok(summary)
        })
        .await??;

        tracing::warn!(
            "All data deleted: {} exercises, {} users",
            summary.exercises_deleted,
            summary.users_deleted
        );

        Ok(summary)
    }
}
