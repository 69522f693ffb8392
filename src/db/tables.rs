use redb::TableDefinition;

/// Users table: user_id (UUID) -> UserRecord (serialized)
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Exercises table: exercise_id (UUID) -> ExerciseRecord (serialized)
pub const EXERCISES: TableDefinition<&str, &[u8]> = TableDefinition::new("exercises");

/// User exercises index: user_id -> Vec<exercise_id> in insertion order
/// Used to answer log queries without scanning every exercise
pub const USER_EXERCISES: TableDefinition<&str, &[u8]> = TableDefinition::new("user_exercises");
