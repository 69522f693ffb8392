pub mod exercise;
pub mod log;
pub mod user;

pub use exercise::{ExerciseRecord, LoggedExercise, NewExercise};
pub use log::{ExerciseLog, LogEntry, LogQuery};
pub use user::{NewUser, User, UserRecord};
