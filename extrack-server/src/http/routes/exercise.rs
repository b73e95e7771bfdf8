//! Exercise tracker endpoints
//!
//! The wire contract is inherited: `_id` key spelling, urlencoded form
//! bodies on the POSTs, plain-text error bodies. Success bodies are
//! JSON.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{DurationMinutes, Exercise, ExerciseDate, ValidationError};

/// Create user request
#[derive(Deserialize)]
pub struct NewUserForm {
    pub username: Option<String>,
}

/// Add exercise request
#[derive(Deserialize)]
pub struct AddExerciseForm {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Fetch log query params
#[derive(Deserialize)]
pub struct LogQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// New user response
#[derive(Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

/// List entry: user with their full log
#[derive(Serialize)]
pub struct UserWithLogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub log: Vec<Exercise>,
}

impl From<User> for UserWithLogResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            log: u.log.0,
        }
    }
}

/// Add exercise response: the owning user's id plus the appended entry,
/// not the updated log.
#[derive(Serialize)]
pub struct AddExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub description: String,
    pub duration: Number,
    pub date: String,
}

/// Fetch log response: the full log plus its derived count
#[derive(Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub log: Vec<Exercise>,
    pub count: usize,
}

/// Parse the caller-supplied user id before touching the store.
fn parse_user_id(raw: Option<String>) -> Result<Uuid, ValidationError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::Missing { field: "userId" })?;

    Uuid::parse_str(&raw).map_err(|_| ValidationError::InvalidFormat {
        field: "userId",
        reason: "must be a UUID",
    })
}

/// POST /api/exercise/new-user
///
/// The username is stored as-is; no length, charset, or uniqueness
/// checks. Only its presence is required.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewUserForm>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = form
        .username
        .ok_or(ValidationError::Missing { field: "username" })?;

    let user = UserRepo::new(&state.pool).create(&username).await?;
    tracing::info!(id = %user.id, "created user");

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

/// GET /api/exercise/users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserWithLogResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;

    Ok(Json(
        users.into_iter().map(UserWithLogResponse::from).collect(),
    ))
}

/// POST /api/exercise/add
///
/// Missing or empty `date` defaults to today on the service clock.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddExerciseForm>,
) -> Result<Json<AddExerciseResponse>, ApiError> {
    let user_id = parse_user_id(form.user_id)?;

    let description = form
        .description
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::Missing { field: "description" })?;

    let duration = DurationMinutes::parse(form.duration.as_deref().unwrap_or(""))?;

    let date = match form.date.as_deref() {
        Some(s) if !s.is_empty() => ExerciseDate::parse(s)?,
        _ => ExerciseDate::today(),
    };

    let exercise = Exercise::new(description, duration, date);
    UserRepo::new(&state.pool)
        .append_exercise(user_id, &exercise)
        .await?;
    tracing::info!(id = %user_id, "appended exercise");

    Ok(Json(AddExerciseResponse {
        id: user_id,
        description: exercise.description,
        duration: exercise.duration,
        date: exercise.date,
    }))
}

/// GET /api/exercise/log?userId=...
async fn fetch_log(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogResponse>, ApiError> {
    let user_id = parse_user_id(query.user_id)?;

    let user = UserRepo::new(&state.pool).get(user_id).await?;
    let log = user.log.0;

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

/// Exercise tracker routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercise/new-user", post(create_user))
        .route("/api/exercise/users", get(list_users))
        .route("/api/exercise/add", post(add_exercise))
        .route("/api/exercise/log", get(fetch_log))
}
