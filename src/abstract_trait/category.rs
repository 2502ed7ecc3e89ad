use crate::{
    domain::{
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
        responses::{CategoryCreatedResponse, CategoryResponse, MessageResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;
pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<i32, RepositoryError>;
    async fn update(&self, id: i32, req: &UpdateCategoryRequest) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(&self) -> Result<Vec<CategoryResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<CategoryCreatedResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<MessageResponse, ServiceError>;
    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
