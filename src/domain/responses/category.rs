use crate::model::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    #[serde(rename = "CategoryID")]
    pub category_id: i32,

    #[serde(rename = "Title")]
    pub title: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        CategoryResponse {
            category_id: value.category_id,
            title: value.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreatedResponse {
    pub message: String,

    #[serde(rename = "categoryID")]
    pub category_id: i32,
}
