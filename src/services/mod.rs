pub mod admin;
pub mod exercises;
pub mod logs;
pub mod users;

pub use admin::{AdminService, ResetSummary};
pub use exercises::ExerciseService;
pub use logs::{LogFilter, LogService};
pub use users::UserService;
