use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetricsResponse {
    pub total_products: i64,
    pub total_categories: i64,
    pub total_orders: i64,
    pub total_customers: i64,
}
