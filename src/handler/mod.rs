mod category;
mod customer;
mod dashboard;
mod order;
mod product;
mod review;

use crate::{config::Config, state::AppState, utils::shutdown_signal};
use anyhow::Result;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::category::category_routes;
pub use self::customer::customer_routes;
pub use self::dashboard::dashboard_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::review::review_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        dashboard::get_metrics,

        category::get_categories,
        category::create_category,
        category::update_category,
        category::delete_category,

        product::get_products,
        product::create_product,
        product::update_product,
        product::delete_product,

        order::get_orders,
        order::get_orders_with_items,
        order::search_orders,
        order::update_order_status,
        order::get_order_items,

        customer::get_customers,

        review::get_reviews,
        review::delete_review,
    ),
    tags(
        (name = "Dashboard", description = "Dashboard metrics endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Customer", description = "Customer endpoints"),
        (name = "Review", description = "Review endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// Builds the bare application router; `serve` wraps it with the CORS
    /// and tracing layers.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(dashboard_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(review_routes(shared_state.clone()));

        let (app_router, api) = api_router.split_for_parts();

        let openapi = Arc::new(api);

        app_router.route(
            "/api-docs/openapi.json",
            get(move || {
                let openapi = openapi.clone();
                async move { Json((*openapi).clone()) }
            }),
        )
    }

    pub async fn serve(config: &Config, app_state: AppState) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true);

        let app = Self::build(app_state)
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        let addr = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API document: http://localhost:{}/api-docs/openapi.json", config.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
