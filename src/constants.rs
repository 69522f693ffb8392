/// Port used when neither SERVER_PORT nor PORT is set
pub const DEFAULT_PORT: u16 = 3000;

/// Database file used when DATABASE_PATH is not set
pub const DEFAULT_DATABASE_PATH: &str = "./data/exercise-tracker.db";

/// Outward rendering of exercise dates, e.g. "Mon Jan 1 2024"
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %-d %Y";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a missing or blank username
pub const ERR_USERNAME_REQUIRED: &str = "username is required";

/// Error message for a missing or blank exercise description
pub const ERR_DESCRIPTION_REQUIRED: &str = "description is required";

/// Error message for a missing or non-integer duration
pub const ERR_DURATION_INVALID: &str = "duration must be a whole number of minutes";
