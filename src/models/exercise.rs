use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Clients send duration either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Body of `POST /users/{id}/exercises`. Fields are loosely typed so the
/// validation order decides which message a mistyped field produces.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    pub description: Option<serde_json::Value>,
    pub duration: Option<DurationInput>,
    pub date: Option<serde_json::Value>,
}

/// A validated exercise, ready to be inserted for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedExercise {
    pub user_id: i64,
    pub exercise_id: i64,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for CreatedExercise {
    fn from(exercise: Exercise) -> Self {
        Self {
            user_id: exercise.user_id,
            exercise_id: exercise.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}
