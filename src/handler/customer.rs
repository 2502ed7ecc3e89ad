use crate::{
    abstract_trait::DynCustomerService, domain::responses::CustomerResponse, errors::HttpError,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    responses(
        (status = 200, description = "List of customers", body = Vec<CustomerResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .layer(Extension(app_state.di_container.customer_service.clone()))
}
