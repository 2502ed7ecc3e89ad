use crate::{
    abstract_trait::CustomerRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                customer_id,
                first_name,
                last_name,
                email,
                address,
                phone
            FROM customer
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(customers)
    }
}
