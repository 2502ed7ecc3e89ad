use crate::{domain::responses::parse_money, errors::ServiceError, model::Product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "ProductID")]
    pub product_id: i32,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Model")]
    pub model: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,

    #[serde(rename = "Stock")]
    pub stock: i32,

    #[serde(rename = "CategoryID")]
    pub category_id: i32,

    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,

    #[serde(rename = "Features")]
    pub features: Option<String>,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,

    #[serde(rename = "Rating")]
    pub rating: Option<String>,

    #[serde(rename = "StockStatus")]
    pub stock_status: Option<String>,

    #[serde(rename = "Dimensions")]
    pub dimensions: Option<String>,

    #[serde(rename = "CategoryName")]
    pub category_name: String,
}

impl TryFrom<Product> for ProductResponse {
    type Error = ServiceError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let price = parse_money("price", &value.price)?;

        Ok(ProductResponse {
            product_id: value.product_id,
            title: value.title,
            model: value.model,
            description: value.description,
            stock: value.stock,
            category_id: value.category_id,
            manufacturer: value.manufacturer,
            features: value.features,
            price,
            image_url: value.image_url,
            rating: value.rating,
            stock_status: value.stock_status,
            dimensions: value.dimensions,
            category_name: value.category_name,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    pub message: String,

    #[serde(rename = "ProductID")]
    pub product_id: i32,
}
