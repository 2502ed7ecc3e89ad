use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "Title")]
    #[schema(example = "Smartphone")]
    pub title: Option<String>,

    #[serde(rename = "Model")]
    pub model: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,

    #[serde(rename = "Stock")]
    #[schema(example = 100)]
    pub stock: Option<i32>,

    #[serde(rename = "CategoryID")]
    #[schema(example = 1)]
    pub category_id: Option<i32>,

    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,

    #[serde(rename = "Features")]
    pub features: Option<String>,

    #[serde(rename = "Price")]
    #[schema(example = 499.99)]
    pub price: Option<f64>,

    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,

    #[serde(rename = "Rating")]
    pub rating: Option<f64>,

    #[serde(rename = "StockStatus")]
    pub stock_status: Option<String>,

    #[serde(rename = "Dimensions")]
    pub dimensions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(rename = "Title")]
    #[schema(example = "Smartphone")]
    pub title: Option<String>,

    #[serde(rename = "Model")]
    pub model: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,

    #[serde(rename = "Stock")]
    #[schema(example = 100)]
    pub stock: Option<i32>,

    #[serde(rename = "CategoryID")]
    #[schema(example = 1)]
    pub category_id: Option<i32>,

    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,

    #[serde(rename = "Features")]
    pub features: Option<String>,

    #[serde(rename = "Price")]
    #[schema(example = 499.99)]
    pub price: Option<f64>,

    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,

    #[serde(rename = "Rating")]
    pub rating: Option<f64>,

    #[serde(rename = "StockStatus")]
    pub stock_status: Option<String>,

    #[serde(rename = "Dimensions")]
    pub dimensions: Option<String>,
}
