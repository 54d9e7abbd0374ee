use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::handlers::exercises::{find_user, ExercisesState};
use crate::models::{ExerciseLog, LogEntry, LogQuery};
use crate::validation::{apply_limit, apply_window};

const LOGS_FAILED: &str = "Failed to retrieve logs";

pub async fn get_logs(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    query: std::result::Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<ExerciseLog>> {
    let Query(query) = query?;

    let user = find_user(&state.user_repo, &user_id)
        .await
        .map_err(|e| e.or_internal(LOGS_FAILED))?;

    let entries: Vec<LogEntry> = state
        .exercise_repo
        .find_by_user(user.id)
        .await
        .map_err(|e| e.or_internal(LOGS_FAILED))?
        .into_iter()
        .map(LogEntry::from)
        .collect();

    let window = apply_window(entries, query.from_date(), query.to_date());
    // count reflects the date window, not the limit
    let count = window.len();
    let logs = apply_limit(window, query.limit());

    tracing::debug!(user_id = user.id, count, returned = logs.len(), "Logs retrieved");

    Ok(Json(ExerciseLog {
        id: user.id,
        username: user.username,
        count,
        logs,
    }))
}
