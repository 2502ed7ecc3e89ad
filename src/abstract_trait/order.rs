use crate::{
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{MessageResponse, OrderItemResponse, OrderResponse, OrderWithItemsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem, OrderWithItems},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<u64, RepositoryError>;
    async fn search_by_customer(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderWithItems>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<MessageResponse, ServiceError>;
    async fn search_by_customer(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderWithItemsResponse>, ServiceError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemResponse>, ServiceError>;
}
