use crate::{
    abstract_trait::{CustomerServiceTrait, DynCustomerRepository},
    domain::responses::CustomerResponse,
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct CustomerService {
    repository: DynCustomerRepository,
}

impl CustomerService {
    pub fn new(repository: DynCustomerRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn find_all(&self) -> Result<Vec<CustomerResponse>, ServiceError> {
        let customers = self.repository.find_all().await?;

        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
