use crate::model::Review;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    #[serde(rename = "ReviewID")]
    pub review_id: i32,

    #[serde(rename = "CustomerName")]
    pub customer_name: String,

    #[serde(rename = "ProductName")]
    pub product_name: String,

    #[serde(rename = "Rating")]
    pub rating: Option<i32>,

    #[serde(rename = "ReviewText")]
    pub review_text: Option<String>,

    #[serde(rename = "ReviewDate")]
    pub review_date: Option<NaiveDateTime>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        ReviewResponse {
            review_id: value.review_id,
            customer_name: value.customer_name,
            product_name: value.product_name,
            rating: value.rating,
            review_text: value.review_text,
            review_date: value.review_date,
        }
    }
}
