//! OpenAPI documentation configuration.

use crate::controllers::health_controller::HealthResponse;
use crate::responses::{ErrorCategory, ProblemDetail};
use marquee_core::{MovieRecord, MovieRecordRedisHash, User};
use marquee_service::{
    MovieRecordRedisHashResponse, MovieRecordResponse, MovieRecordsRedisHashResponse,
    MovieRecordsResponse, UserDataResponse, UsersDataResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Marquee API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee API",
        version = "1.0.0",
        description = "User directory and Redis-backed movie record cache",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Marquee host")
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::movie_record_controller::list_movie_records,
        crate::controllers::movie_record_controller::map_movie_records,
        crate::controllers::movie_record_controller::get_movie_record,
        crate::controllers::movie_record_controller::create_movie_record,
        crate::controllers::movie_record_controller::update_movie_record,
        crate::controllers::movie_record_controller::delete_movie_record,
        crate::controllers::movie_record_redis_hash_controller::list_movie_records_v2,
        crate::controllers::movie_record_redis_hash_controller::get_movie_record_v2,
        crate::controllers::movie_record_redis_hash_controller::create_movie_record_v2,
        crate::controllers::movie_record_redis_hash_controller::update_movie_record_v2,
        crate::controllers::movie_record_redis_hash_controller::delete_movie_record_v2,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            User,
            MovieRecord,
            UsersDataResponse,
            UserDataResponse,
            MovieRecordsResponse,
            MovieRecordResponse,
            MovieRecordRedisHash,
            MovieRecordsRedisHashResponse,
            MovieRecordRedisHashResponse,
            ProblemDetail,
            ErrorCategory,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User directory endpoints"),
        (name = "movie-records", description = "Movie record cache endpoints"),
        (name = "movie-records-v2", description = "Movie records kept in a single hash"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
