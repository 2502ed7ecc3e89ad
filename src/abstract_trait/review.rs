use crate::{
    domain::responses::{MessageResponse, ReviewResponse},
    errors::{RepositoryError, ServiceError},
    model::Review,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynReviewRepository = Arc<dyn ReviewRepositoryTrait + Send + Sync>;
pub type DynReviewService = Arc<dyn ReviewServiceTrait + Send + Sync>;

#[async_trait]
pub trait ReviewRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ReviewServiceTrait {
    async fn find_all(&self) -> Result<Vec<ReviewResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError>;
}
