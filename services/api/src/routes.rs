//! API service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    error::{ApiError, ApiResult, map_repository_error},
    models::{CreateUserRequest, ListUsersParams, UserResponse},
    repositories::UserRepository,
    state::AppState,
};

/// Create the router for the API service
///
/// `/users/` with a trailing slash is registered alongside `/users`
/// because axum does not redirect between the two.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .with_state(state)
}

/// Resolve the repository, or fail with 503 when the service started
/// without a database connection
fn repository(state: &AppState) -> ApiResult<&UserRepository> {
    state
        .user_repository
        .as_ref()
        .ok_or(ApiError::ServiceUnavailable)
}

/// Health check endpoint
///
/// Must answer regardless of database state, so it never touches the
/// repository.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.environment,
    }))
}

/// Root endpoint
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Hello World",
    }))
}

/// Create a new user
///
/// The email is pre-checked against existing records; a duplicate fails
/// with 400 and creates nothing.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repository = repository(&state)?;

    let existing = repository
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user by email: {}", e);
            map_repository_error(e)
        })?;

    if existing.is_some() {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let user = repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        map_repository_error(e)
    })?;

    Ok(Json(user.into()))
}

/// List users with skip/limit pagination, in ascending id order
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let repository = repository(&state)?;

    let users = repository
        .list(params.skip(), params.limit())
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {}", e);
            map_repository_error(e)
        })?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = repository(&state)?
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {}", e);
            map_repository_error(e)
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
