use serde::{Deserialize, Serialize};

use super::Exercise;

/// Query string of `GET /users/{id}/logs`. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    pub fn from_date(&self) -> Option<&str> {
        non_empty(&self.from)
    }

    pub fn to_date(&self) -> Option<&str> {
        non_empty(&self.to)
    }

    pub fn limit(&self) -> Option<&str> {
        non_empty(&self.limit)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseLog {
    pub id: i64,
    pub username: String,
    /// Entries inside the date window, counted before `limit` is applied.
    pub count: usize,
    pub logs: Vec<LogEntry>,
}
