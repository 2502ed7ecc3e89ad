use crate::{
    domain::responses::parse_money,
    errors::ServiceError,
    model::{Order, OrderWithItems},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    #[serde(rename = "OrderID")]
    pub order_id: i32,

    #[serde(rename = "CustomerID")]
    pub customer_id: i32,

    #[serde(rename = "OrderDate")]
    pub order_date: NaiveDateTime,

    #[serde(rename = "OrderStatus")]
    pub order_status: String,

    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,

    #[serde(rename = "ShippingAddress")]
    pub shipping_address: Option<String>,
}

impl TryFrom<Order> for OrderResponse {
    type Error = ServiceError;

    fn try_from(value: Order) -> Result<Self, Self::Error> {
        let total_amount = parse_money("total_amount", &value.total_amount)?;

        Ok(OrderResponse {
            order_id: value.order_id,
            customer_id: value.customer_id,
            order_date: value.order_date,
            order_status: value.order_status,
            total_amount,
            shipping_address: value.shipping_address,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderWithItemsResponse {
    #[serde(rename = "OrderID")]
    pub order_id: i32,

    #[serde(rename = "CustomerID")]
    pub customer_id: i32,

    #[serde(rename = "OrderDate")]
    pub order_date: NaiveDateTime,

    #[serde(rename = "OrderStatus")]
    pub order_status: String,

    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,

    #[serde(rename = "ShippingAddress")]
    pub shipping_address: Option<String>,

    /// `ProductID:Quantity:Price` entries joined by `"; "`, ordered by
    /// product id within the order.
    #[serde(rename = "OrderItems")]
    pub order_items: String,
}

impl TryFrom<OrderWithItems> for OrderWithItemsResponse {
    type Error = ServiceError;

    fn try_from(value: OrderWithItems) -> Result<Self, Self::Error> {
        let total_amount = parse_money("total_amount", &value.total_amount)?;

        Ok(OrderWithItemsResponse {
            order_id: value.order_id,
            customer_id: value.customer_id,
            order_date: value.order_date,
            order_status: value.order_status,
            total_amount,
            shipping_address: value.shipping_address,
            order_items: value.order_items.unwrap_or_default(),
        })
    }
}
