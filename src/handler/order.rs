use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{SearchOrdersQuery, UpdateOrderStatusRequest},
        responses::{MessageResponse, OrderItemResponse, OrderResponse, OrderWithItemsResponse},
    },
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Same listing as `GET /api/orders`; both spellings are part of the
/// published contract.
#[utoipa::path(
    get,
    path = "/api/orders/items",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders_with_items(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = MessageResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/search",
    tag = "Order",
    params(SearchOrdersQuery),
    responses(
        (status = 200, description = "Orders of one customer with aggregated line items", body = Vec<OrderWithItemsResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_orders(
    Extension(service): Extension<DynOrderService>,
    Query(params): Query<SearchOrdersQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search_by_customer(params.customer_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/items",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Line items of one order", body = Vec<OrderItemResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order_items(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_items(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/items", get(get_orders_with_items))
        .route("/api/orders/search", get(search_orders))
        .route("/api/orders/{id}", put(update_order_status))
        .route("/api/orders/{id}/items", get(get_order_items))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
