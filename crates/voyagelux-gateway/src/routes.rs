//! HTTP surface of the agent studio.

use std::net::SocketAddr;

use axum::{
    body::{Body, Bytes},
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use voyagelux_core::{
    build_weekly_schedule, platform_cta_table, run_agent, AgentResponse, PlanRequest, PlatformCta,
    WeeklySchedule,
};

use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", get(generate_default).post(generate))
        .route("/api/schedule", get(schedule_default).post(schedule))
        .route("/api/platforms", get(platforms))
        .layer(axum::middleware::from_fn(log_studio_traffic))
}

async fn log_studio_traffic(request: Request<Body>, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        peer = %peer,
        "studio request"
    );
    next.run(request).await
}

async fn health() -> &'static str {
    "OK"
}

async fn generate_default() -> Json<AgentResponse> {
    let request = PlanRequest::default();
    Json(run_agent(&request.profile, &request.goal))
}

async fn generate(body: Bytes) -> Result<Json<AgentResponse>, ApiError> {
    let request = PlanRequest::from_body(&body)?;
    let response = run_agent(&request.profile, &request.goal);
    tracing::info!(
        brand = %response.profile.brand_name,
        week_of = %response.schedule.week_of,
        posts = response.schedule.posts.len(),
        "plan generated"
    );
    Ok(Json(response))
}

async fn schedule_default() -> Json<WeeklySchedule> {
    let request = PlanRequest::default();
    Json(build_weekly_schedule(&request.profile, &request.goal))
}

async fn schedule(body: Bytes) -> Result<Json<WeeklySchedule>, ApiError> {
    let request = PlanRequest::from_body(&body)?;
    let schedule = build_weekly_schedule(&request.profile, &request.goal);
    tracing::info!(
        week_of = %schedule.week_of,
        posts = schedule.posts.len(),
        "schedule built"
    );
    Ok(Json(schedule))
}

async fn platforms() -> Json<Vec<PlatformCta>> {
    Json(platform_cta_table())
}
