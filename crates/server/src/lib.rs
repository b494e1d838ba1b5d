pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Launchplan API",
        version = "0.1.0",
        description = "Turns product-marketing inputs into a templated go-to-market plan"
    ),
    paths(
        routes::health_check,
        routes::create_plan,
        routes::create_plan_markdown,
    ),
    components(schemas(
        routes::HealthResponse,
        error::ErrorResponse,
        launchplan_core::PlanRequest,
        launchplan_core::Plan,
        launchplan_core::LaunchPhase,
        launchplan_core::PersonaInsight,
        launchplan_core::MessagingPillar,
        launchplan_core::ChannelStrategy,
        launchplan_core::GrowthExperiment,
        launchplan_core::MeasurementMetric,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "plan", description = "Go-to-market plan synthesis"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let app_dir = state.app_dir.clone();

    let api_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/plan", post(routes::create_plan))
        .route("/api/plan/markdown", post(routes::create_plan_markdown))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    if let Some(app_dir) = app_dir {
        let index_file = app_dir.join("index.html");
        let serve_dir = ServeDir::new(&app_dir).not_found_service(ServeFile::new(&index_file));
        api_router.fallback_service(serve_dir)
    } else {
        api_router
    }
}
