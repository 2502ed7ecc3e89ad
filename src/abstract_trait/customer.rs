use crate::{
    domain::responses::CustomerResponse,
    errors::{RepositoryError, ServiceError},
    model::Customer,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;
pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
}

#[async_trait]
pub trait CustomerServiceTrait {
    async fn find_all(&self) -> Result<Vec<CustomerResponse>, ServiceError>;
}
