//! Movie record controller.
//!
//! Thin HTTP mapping over [`MovieRecordService`](marquee_service::MovieRecordService);
//! absence is already reported by the service as a not-found error.

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
use indexmap::IndexMap;
use marquee_core::MovieRecord;
use marquee_service::{MovieRecordResponse, MovieRecordsResponse};
use tracing::debug;

/// Creates the movie record router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_movie_records)
                .post(create_movie_record)
                .patch(update_movie_record),
        )
        .route("/map", get(map_movie_records))
        .route("/:id", get(get_movie_record).delete(delete_movie_record))
}

/// List every cached movie record.
#[utoipa::path(
    get,
    path = "/api/v1/movie/records",
    tag = "movie-records",
    responses(
        (status = 200, description = "Cached records", body = MovieRecordsResponse)
    )
)]
pub async fn list_movie_records(State(state): State<AppState>) -> ApiResult<MovieRecordsResponse> {
    ok(state.movie_record_service.list().await?)
}

/// Cached movie records keyed by id.
#[utoipa::path(
    get,
    path = "/api/v1/movie/records/map",
    tag = "movie-records",
    responses(
        (status = 200, description = "Records keyed by id")
    )
)]
pub async fn map_movie_records(
    State(state): State<AppState>,
) -> ApiResult<IndexMap<String, MovieRecord>> {
    ok(state.movie_record_service.map().await?)
}

/// Get a movie record by id.
#[utoipa::path(
    get,
    path = "/api/v1/movie/records/{id}",
    tag = "movie-records",
    params(("id" = String, Path, description = "Movie record id")),
    responses(
        (status = 200, description = "Record found", body = MovieRecordResponse),
        (status = 404, description = "Unknown record", body = ProblemDetail)
    )
)]
pub async fn get_movie_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MovieRecordResponse> {
    debug!("Get movie record request: {}", id);
    ok(state.movie_record_service.get(&id).await?)
}

/// Cache a movie record under its id.
#[utoipa::path(
    post,
    path = "/api/v1/movie/records",
    tag = "movie-records",
    request_body = MovieRecord,
    responses(
        (status = 201, description = "Record cached", body = MovieRecord),
        (status = 400, description = "Invalid payload", body = ProblemDetail)
    )
)]
pub async fn create_movie_record(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<MovieRecord>,
) -> Result<(StatusCode, Json<MovieRecord>), AppError> {
    debug!("Create movie record request: {}", record.id);

    let record = state.movie_record_service.create(record).await?;
    Ok(created(record))
}

/// Replace a cached movie record.
#[utoipa::path(
    patch,
    path = "/api/v1/movie/records",
    tag = "movie-records",
    request_body = MovieRecord,
    responses(
        (status = 200, description = "Record replaced", body = MovieRecord),
        (status = 400, description = "Invalid payload", body = ProblemDetail),
        (status = 404, description = "Unknown record", body = ProblemDetail)
    )
)]
pub async fn update_movie_record(
    State(state): State<AppState>,
    ValidatedJson(record): ValidatedJson<MovieRecord>,
) -> ApiResult<MovieRecord> {
    debug!("Update movie record request: {}", record.id);
    ok(state.movie_record_service.update(record).await?)
}

/// Evict a movie record.
#[utoipa::path(
    delete,
    path = "/api/v1/movie/records/{id}",
    tag = "movie-records",
    params(("id" = String, Path, description = "Movie record id")),
    responses(
        (status = 200, description = "Record evicted", body = bool),
        (status = 404, description = "Unknown record", body = ProblemDetail)
    )
)]
pub async fn delete_movie_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<bool> {
    debug!("Delete movie record request: {}", id);
    ok(state.movie_record_service.delete(&id).await?)
}
