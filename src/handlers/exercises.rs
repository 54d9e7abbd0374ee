use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{parse_user_id, CreateExercise, CreatedExercise, User};
use crate::repositories::{ExerciseRepository, UserRepository};
use crate::validation::validate_new_exercise;

const ADD_FAILED: &str = "Failed to add exercise";

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

/// Resolve the user named by a path segment.
pub(crate) async fn find_user(repo: &UserRepository, raw_id: &str) -> Result<User> {
    let not_found = || AppError::NotFound("User not found".to_string());

    let id = parse_user_id(raw_id).ok_or_else(not_found)?;
    repo.find_by_id(id).await?.ok_or_else(not_found)
}

pub async fn add_exercise(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    payload: std::result::Result<Json<CreateExercise>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedExercise>)> {
    let body = match payload {
        Ok(Json(body)) => body,
        // no JSON body at all reads as an empty one
        Err(JsonRejection::MissingJsonContentType(_)) => CreateExercise::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let new = validate_new_exercise(body, Utc::now().date_naive())?;

    let user = find_user(&state.user_repo, &user_id)
        .await
        .map_err(|e| e.or_internal(ADD_FAILED))?;

    let exercise = state
        .exercise_repo
        .create(user.id, new)
        .await
        .map_err(|e| e.or_internal(ADD_FAILED))?;

    tracing::info!(
        user_id = user.id,
        exercise_id = exercise.id,
        date = %exercise.date,
        "Exercise added"
    );

    Ok((StatusCode::CREATED, Json(exercise.into())))
}
