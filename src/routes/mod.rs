pub mod admin;
pub mod exercises;
pub mod health;
pub mod index;
pub mod logs;
pub mod users;

pub use admin::delete_all;
pub use exercises::log_exercise;
pub use health::health_check;
pub use index::landing_page;
pub use logs::get_logs;
pub use users::{create_user, list_users};
