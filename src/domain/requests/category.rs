use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// No presence check on `Title`: an absent field is bound as NULL and the
/// store's NOT NULL constraint surfaces it as a 500.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(rename = "Title")]
    #[schema(example = "Electronics")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "Title")]
    #[schema(example = "Electronics")]
    pub title: Option<String>,
}
