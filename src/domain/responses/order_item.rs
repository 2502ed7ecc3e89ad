use crate::{domain::responses::parse_money, errors::ServiceError, model::OrderItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    #[serde(rename = "ProductID")]
    pub product_id: i32,

    #[serde(rename = "Quantity")]
    pub quantity: i32,

    #[serde(rename = "Price")]
    pub price: f64,
}

impl TryFrom<OrderItem> for OrderItemResponse {
    type Error = ServiceError;

    fn try_from(value: OrderItem) -> Result<Self, Self::Error> {
        let price = parse_money("price", &value.price)?;

        Ok(OrderItemResponse {
            product_id: value.product_id,
            quantity: value.quantity,
            price,
        })
    }
}
