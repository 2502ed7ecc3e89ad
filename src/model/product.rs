use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row shape of the category-joined product listing. The money columns are
/// selected as text so the response layer owns the numeric conversion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub title: String,
    pub model: Option<String>,
    pub description: Option<String>,
    pub stock: i32,
    pub category_id: i32,
    pub manufacturer: Option<String>,
    pub features: Option<String>,
    pub price: String,
    pub image_url: Option<String>,
    pub rating: Option<String>,
    pub stock_status: Option<String>,
    pub dimensions: Option<String>,
    pub category_name: String,
}
