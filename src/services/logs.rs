use chrono::{DateTime, Utc};

use crate::dates::{format_date, parse_date};
use crate::db::{get_record, tables, Db};
use crate::error::{AppError, Result};
use crate::models::{ExerciseLog, ExerciseRecord, LogEntry, LogQuery, UserRecord};

/// Answers exercise log queries
#[derive(Clone)]
pub struct LogService {
    db: Db,
}

/// Resolved log filter
///
/// Bounds are inclusive. A limit of `None` returns every match.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Resolve raw query parameters
    ///
    /// Unparseable bounds are ignored. A limit that is not a positive integer
    /// means no limit.
    pub fn from_query(query: &LogQuery) -> Self {
        Self {
            from: parse_bound("from", query.from.as_deref()),
            to: parse_bound("to", query.to.as_deref()),
            limit: parse_limit(query.limit.as_deref()),
        }
    }

    fn matches(&self, record: &ExerciseRecord) -> bool {
        let after_from = self
            .from
            .map_or(true, |from| record.date >= from.timestamp_millis());
        let before_to = self
            .to
            .map_or(true, |to| record.date <= to.timestamp_millis());
        after_from && before_to
    }

    /// Filter, sort ascending by date and truncate
    ///
    /// Records with equal dates keep their input order.
    pub fn apply(&self, user_id: &str, records: Vec<ExerciseRecord>) -> Vec<LogEntry> {
        let mut matching: Vec<ExerciseRecord> = records
            .into_iter()
            .filter(|r| r.user_id == user_id && self.matches(r))
            .collect();
        matching.sort_by_key(|r| r.date);

        matching
            .into_iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|r| LogEntry {
                date: format_date(r.date()),
                description: r.description,
                duration: r.duration,
            })
            .collect()
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        tracing::warn!("Ignoring unparseable '{}' bound: {}", name, raw);
    }
    parsed
}

fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
}

impl LogService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Fetch the exercise log of `user_id`
    ///
    /// Fails with `UserNotFound` when the user does not exist.
    pub async fn get_logs(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog> {
        let filter = LogFilter::from_query(query);
        let db = self.db.clone();
        let owner_id = user_id.to_string();

        let (username, records) =
            tokio::task::spawn_blocking(move || -> Result<(String, Vec<ExerciseRecord>)> {
                let read_txn = db.begin_read()?;

                let users = read_txn.open_table(tables::USERS)?;
                let user: UserRecord =
                    get_record(&users, &owner_id)?.ok_or(AppError::UserNotFound)?;

                let index = read_txn.open_table(tables::USER_EXERCISES)?;
                let ids: Vec<String> = get_record(&index, &owner_id)?.unwrap_or_default();

                let exercises = read_txn.open_table(tables::EXERCISES)?;
                let mut records = Vec::with_capacity(ids.len());
                for id in &ids {
                    if let Some(record) = get_record::<ExerciseRecord>(&exercises, id)? {
                        records.push(record);
                    }
                }

                Ok((user.username, records))
            })
            .await??;

        let log = filter.apply(user_id, records);

        tracing::debug!("Log for user {}: {} entries", user_id, log.len());

        Ok(ExerciseLog {
            username,
            count: log.len(),
            id: user_id.to_string(),
            log,
        })
    }
}
