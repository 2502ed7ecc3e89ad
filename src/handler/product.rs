use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductCreatedResponse, ProductResponse},
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
    path = "/api/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products with category names", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductCreatedResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
