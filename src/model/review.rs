use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape of the customer/product-joined review listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub review_id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub rating: Option<i32>,
    pub review_text: Option<String>,
    pub review_date: Option<NaiveDateTime>,
}
