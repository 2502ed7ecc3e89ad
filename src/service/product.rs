use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductCreatedResponse, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

/// Truthy presence check on the required fields: a zero Stock, CategoryID or
/// Price counts as missing, as does an empty Title. Known to reject
/// legitimate zero values; kept until the contract is revised.
fn required_fields_present(
    title: Option<&str>,
    stock: Option<i32>,
    category_id: Option<i32>,
    price: Option<f64>,
) -> bool {
    let title_ok = title.is_some_and(|t| !t.is_empty());
    let stock_ok = stock.is_some_and(|s| s != 0);
    let category_ok = category_id.is_some_and(|c| c != 0);
    let price_ok = price.is_some_and(|p| p != 0.0);

    title_ok && stock_ok && category_ok && price_ok
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_all().await?;

        products
            .into_iter()
            .map(ProductResponse::try_from)
            .collect()
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductCreatedResponse, ServiceError> {
        if !required_fields_present(req.title.as_deref(), req.stock, req.category_id, req.price) {
            return Err(ServiceError::Validation(vec![
                "Missing required fields".into(),
            ]));
        }

        let id = self.repository.create(req).await?;

        Ok(ProductCreatedResponse {
            message: "Product added successfully".into(),
            product_id: id,
        })
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<MessageResponse, ServiceError> {
        if !required_fields_present(req.title.as_deref(), req.stock, req.category_id, req.price) {
            return Err(ServiceError::Validation(vec![
                "Missing required fields".into(),
            ]));
        }

        // No row-affected check: updating an unknown id still reports success.
        self.repository.update(id, req).await?;

        Ok(MessageResponse::new("Product updated successfully"))
    }

    async fn delete(&self, id: i32) -> Result<MessageResponse, ServiceError> {
        self.repository.delete(id).await?;

        Ok(MessageResponse::new("Product deleted successfully"))
    }
}
