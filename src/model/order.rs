use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDateTime,
    pub order_status: String,
    pub total_amount: String,
    pub shipping_address: Option<String>,
}

/// Order row with the aggregated `pid:qty:price` line-item string produced
/// by the customer search query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderWithItems {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDateTime,
    pub order_status: String,
    pub total_amount: String,
    pub shipping_address: Option<String>,
    pub order_items: Option<String>,
}
