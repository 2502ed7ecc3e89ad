use crate::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{CategoryCreatedResponse, CategoryResponse, MessageResponse},
    },
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CategoryCreatedResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = MessageResponse),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", put(update_category))
        .route("/api/categories/{id}", delete(delete_category))
        .layer(Extension(app_state.di_container.category_service.clone()))
}
