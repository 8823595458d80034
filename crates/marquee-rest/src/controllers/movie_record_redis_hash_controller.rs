//! v2 movie record controller, mounted under `/api/v2/movie/records`.

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
use marquee_core::MovieRecordRedisHash;
use marquee_service::{MovieRecordRedisHashResponse, MovieRecordsRedisHashResponse};
use tracing::debug;

/// Creates the v2 movie record router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_movie_records_v2)
                .post(create_movie_record_v2)
                .patch(update_movie_record_v2),
        )
        .route("/:id", get(get_movie_record_v2).delete(delete_movie_record_v2))
}

/// List every record in the hash.
#[utoipa::path(
    get,
    path = "/api/v2/movie/records",
    tag = "movie-records-v2",
    responses(
        (status = 200, description = "Hash records", body = MovieRecordsRedisHashResponse)
    )
)]
pub async fn list_movie_records_v2(
    State(state): State<AppState>,
) -> ApiResult<MovieRecordsRedisHashResponse> {
    ok(state.movie_record_redis_hash_service.list().await?)
}

/// Get a hash record by id.
#[utoipa::path(
    get,
    path = "/api/v2/movie/records/{id}",
    tag = "movie-records-v2",
    params(("id" = String, Path, description = "Movie record id")),
    responses(
        (status = 200, description = "Record found", body = MovieRecordRedisHashResponse),
        (status = 404, description = "Unknown record", body = ProblemDetail)
    )
)]
pub async fn get_movie_record_v2(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MovieRecordRedisHashResponse> {
    debug!("Get v2 movie record request: {}", id);
    ok(state.movie_record_redis_hash_service.get(&id).await?)
}

/// Store a record in the hash.
#[utoipa::path(
    post,
    path = "/api/v2/movie/records",
    tag = "movie-records-v2",
    request_body = MovieRecordRedisHash,
    responses(
        (status = 201, description = "Record stored", body = MovieRecordRedisHash),
        (status = 400, description = "Invalid payload", body = ProblemDetail)
    )
)]
pub async fn create_movie_record_v2(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<MovieRecordRedisHash>,
) -> Result<(StatusCode, Json<MovieRecordRedisHash>), AppError> {
    let record = state.movie_record_redis_hash_service.create(record).await?;
    Ok(created(record))
}

/// Replace a hash record.
#[utoipa::path(
    patch,
    path = "/api/v2/movie/records",
    tag = "movie-records-v2",
    request_body = MovieRecordRedisHash,
    responses(
        (status = 200, description = "Record replaced", body = MovieRecordRedisHash),
        (status = 400, description = "Invalid payload", body = ProblemDetail),
        (status = 404, description = "Unknown record", body = ProblemDetail)
    )
)]
pub async fn update_movie_record_v2(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<MovieRecordRedisHash>,
) -> ApiResult<MovieRecordRedisHash> {
    ok(state.movie_record_redis_hash_service.update(record).await?)
}

/// Remove a hash record. Always answers `true`.
#[utoipa::path(
    delete,
    path = "/api/v2/movie/records/{id}",
    tag = "movie-records-v2",
    params(("id" = String, Path, description = "Movie record id")),
    responses(
        (status = 200, description = "Record removed", body = bool)
    )
)]
pub async fn delete_movie_record_v2(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<bool> {
    state.movie_record_redis_hash_service.delete(&id).await?;
    ok(true)
}
