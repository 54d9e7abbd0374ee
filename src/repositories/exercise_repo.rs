use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, NewExercise};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i64, new: NewExercise) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (user_id, description, duration, date)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![user_id, new.description, new.duration, new.date],
            )?;
            Ok(Exercise {
                id: conn.last_insert_rowid(),
                user_id,
                description: new.description,
                duration: new.duration,
                date: new.date,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// All of a user's exercises, oldest date first. Same-day entries keep
    /// insertion order.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT id, user_id, description, duration, date
                 FROM exercises
                 WHERE user_id = ?
                 ORDER BY date ASC, id ASC",
            )?;
            let exercises = stmt
                .query_map([user_id], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
