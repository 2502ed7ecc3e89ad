use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductCreatedResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<i32, RepositoryError>;
    async fn update(&self, id: i32, req: &UpdateProductRequest) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductCreatedResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<MessageResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
