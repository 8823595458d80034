//! User directory controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, ok, ApiResult, AppError, ProblemDetail},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use marquee_core::{MarqueeError, User};
use marquee_service::{UserDataResponse, UsersDataResponse};
use tracing::debug;

const RESOURCE: &str = "User";

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user).patch(update_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UsersDataResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<UsersDataResponse> {
    debug!("List users request");

    let count = state.user_service.count().await?;
    let users = state.user_service.retrieve_all().await?;
    ok(UsersDataResponse { count, users })
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDataResponse),
        (status = 404, description = "Unknown user", body = ProblemDetail)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserDataResponse> {
    debug!("Get user request: {}", id);

    let user = state
        .user_service
        .retrieve(&id)
        .await?
        .ok_or_else(|| MarqueeError::not_found(RESOURCE, &id))?;
    ok(UserDataResponse::from(user))
}

/// Store a user. An id is generated when the payload carries none.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 201, description = "User stored", body = User),
        (status = 400, description = "Invalid payload", body = ProblemDetail)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> Result<(StatusCode, Json<User>), AppError> {
    debug!("Create user request: {}", user.name);

    let user = state.user_service.insert(user).await?;
    Ok(created(user))
}

/// Replace an existing user.
#[utoipa::path(
    patch,
    path = "/api/v1/users",
    tag = "users",
    request_body = User,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Invalid payload", body = ProblemDetail),
        (status = 404, description = "Unknown user", body = ProblemDetail)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedJson(user): ValidatedJson<User>,
) -> ApiResult<User> {
    let id = user.id.clone().unwrap_or_default();
    debug!("Update user request: {}", id);

    if !state.user_service.update(user.clone()).await? {
        return Err(MarqueeError::not_found(RESOURCE, id).into());
    }
    ok(user)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = bool),
        (status = 404, description = "Unknown user", body = ProblemDetail)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<bool> {
    debug!("Delete user request: {}", id);

    if !state.user_service.delete(&id).await? {
        return Err(MarqueeError::not_found(RESOURCE, &id).into());
    }
    ok(true)
}
