pub mod departments;
pub mod students;

use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: student and department resources,
/// health, metrics and the OpenAPI document.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let students = Router::new()
        .route("/students", get(students::list_students).post(students::create_student))
        .route("/students/", get(students::list_students))
        .route(
            "/students/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::remove_student),
        );

    let departments = Router::new()
        .route("/departments", get(departments::list_departments))
        .route("/departments/", get(departments::list_departments))
        .route("/departments/:name", get(departments::get_department))
        .route("/departments/:name/students", get(departments::department_students))
        .route("/departments/:name/count", get(departments::department_count));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    students
        .merge(departments)
        .merge(ops)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(observability::track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
