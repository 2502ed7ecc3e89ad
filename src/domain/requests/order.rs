use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "shipped")]
    pub status: Option<String>,
}

/// An absent `customerId` is bound as NULL, which matches no rows.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct SearchOrdersQuery {
    #[serde(rename = "customerId")]
    pub customer_id: Option<i32>,
}
