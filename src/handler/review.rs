use crate::{
    abstract_trait::DynReviewService,
    domain::responses::{MessageResponse, ReviewResponse},
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Review",
    responses(
        (status = 200, description = "List of reviews with customer and product names", body = Vec<ReviewResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_reviews(
    Extension(service): Extension<DynReviewService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "Review",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_review(
    Extension(service): Extension<DynReviewService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn review_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/reviews", get(get_reviews))
        .route("/api/reviews/{id}", delete(delete_review))
        .layer(Extension(app_state.di_container.review_service.clone()))
}
