//! Main application router.

use crate::{
    controllers::{
        health_controller, movie_record_controller, movie_record_redis_hash_controller,
        user_controller,
    },
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use marquee_config::ServerConfig;
use marquee_service::{MovieRecordRedisHashService, MovieRecordService, UserService};
use shaku::{HasComponent, Module};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router from a Shaku module.
pub fn create_router_from_module<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module
        + HasComponent<dyn UserService>
        + HasComponent<dyn MovieRecordService>
        + HasComponent<dyn MovieRecordRedisHashService>,
{
    create_router(AppState::from_module(module), server_config)
}

/// Creates the application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let api_router = Router::new()
        .nest("/users", user_controller::router())
        .nest("/movie/records", movie_record_controller::router());

    let mut router = Router::new()
        .merge(health_controller::router())
        .nest("/api/v1", api_router)
        .nest(
            "/api/v2/movie/records",
            movie_record_redis_hash_controller::router(),
        )
        .route("/", get(root))
        .with_state(state);

    if server_config.swagger_enabled {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let router = router
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(logging_middleware));

    info!(
        swagger = server_config.swagger_enabled,
        "Router created with user and movie record endpoints"
    );
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Marquee API v1"
}
