use crate::{
    abstract_trait::DynDashboardService, domain::responses::DashboardMetricsResponse,
    errors::HttpError, state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Entity counts for the dashboard", body = DashboardMetricsResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_metrics(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.metrics().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/metrics", get(get_metrics))
        .layer(Extension(app_state.di_container.dashboard_service.clone()))
}
