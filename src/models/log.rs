use serde::{Deserialize, Serialize};

/// Query parameters accepted by the log endpoint
///
/// Kept as raw strings so that malformed values reach the lenient parsing
/// rules instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One line of a user's exercise log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// A user's exercise log
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseLog {
    pub username: String,
    /// Number of entries in `log` (after limiting)
    pub count: usize,
    /// ID of the owning user
    pub id: String,
    pub log: Vec<LogEntry>,
}
