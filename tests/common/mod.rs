#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use exercise_log::db::{create_memory_pool, DbPool};
use exercise_log::handlers::exercises::ExercisesState;
use exercise_log::migrations::run_migrations_for_tests;
use exercise_log::models::{NewExercise, User};
use exercise_log::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let exercises_state = ExercisesState {
        user_repo: UserRepository::new(pool.clone()),
        exercise_repo: ExerciseRepository::new(pool),
    };

    exercise_log::routes::create_router(exercises_state)
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username)
        .await
        .unwrap()
}

pub async fn create_test_exercise(pool: &DbPool, user_id: i64, description: &str, date: &str) {
    ExerciseRepository::new(pool.clone())
        .create(
            user_id,
            NewExercise {
                description: description.to_string(),
                duration: 20,
                date: date.to_string(),
            },
        )
        .await
        .unwrap();
}

pub async fn count_exercises(pool: &DbPool, user_id: i64) -> usize {
    ExerciseRepository::new(pool.clone())
        .find_by_user(user_id)
        .await
        .unwrap()
        .len()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
