use axum::{routing::get, Json, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::errors::handle_panic;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod conditions;
pub mod snowparks;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Routes with their state applied, without the outer middleware stack.
pub fn app_routes(state: AppState) -> Router {
    let snowpark_routes = Router::new()
        .route("/snowparks", get(snowparks::list).post(snowparks::create))
        .route(
            "/snowparks/:id",
            get(snowparks::get)
                .patch(snowparks::update)
                .put(snowparks::update)
                .delete(snowparks::delete),
        );

    let condition_routes = Router::new()
        .route("/weatherforecast", get(conditions::weather_forecast))
        .route("/airquality", get(conditions::air_quality))
        .route("/activities", get(conditions::activities));

    Router::new()
        .route("/health", get(health))
        .merge(snowpark_routes)
        .merge(condition_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Wrap a router with panic recovery, CORS and request tracing.
pub fn apply_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    apply_layers(app_routes(state), cors)
}
