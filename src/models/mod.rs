pub mod exercise;
pub mod from_row;
pub mod log;
pub mod user;

pub use exercise::{CreateExercise, CreatedExercise, DurationInput, Exercise, NewExercise};
pub use from_row::FromSqliteRow;
pub use log::{ExerciseLog, LogEntry, LogQuery};
pub use user::{parse_user_id, User};
