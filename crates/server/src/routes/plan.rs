use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use launchplan_core::{render_markdown, synthesize, Plan, PlanRequest};
use tracing::{info, warn};

use crate::error::AppError;

fn build_plan(request: PlanRequest) -> Result<Plan, AppError> {
    let input = request.validate().map_err(|e| {
        warn!(missing = ?e.missing_fields(), "Rejected plan request");
        AppError::from(e)
    })?;

    let plan = synthesize(&input);

    info!(
        product = %input.product_name,
        personas = plan.persona_insights.len(),
        phases = plan.launch_phases.len(),
        pillars = plan.messaging_pillars.len(),
        "Synthesized launch plan"
    );

    Ok(plan)
}

#[utoipa::path(
    post,
    path = "/api/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Synthesized go-to-market plan", body = Plan),
        (status = 400, description = "Missing required fields or malformed body", body = crate::error::ErrorResponse)
    ),
    tag = "plan"
)]
pub async fn create_plan(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<Plan>, AppError> {
    let Json(request) = payload?;
    Ok(Json(build_plan(request)?))
}

#[utoipa::path(
    post,
    path = "/api/plan/markdown",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Plan rendered as markdown", body = String, content_type = "text/markdown"),
        (status = 400, description = "Missing required fields or malformed body", body = crate::error::ErrorResponse)
    ),
    tag = "plan"
)]
pub async fn create_plan_markdown(
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let plan = build_plan(request)?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_markdown(&plan),
    ))
}
