use crate::{
    abstract_trait::DashboardRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct DashboardRepository {
    db: ConnectionPool,
}

impl DashboardRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn count(&self, query: &str) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total = sqlx::query_scalar::<_, i64>(query)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch dashboard count: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(total)
    }
}

#[async_trait]
impl DashboardRepositoryTrait for DashboardRepository {
    async fn count_products(&self) -> Result<i64, RepositoryError> {
        self.count("SELECT COUNT(*) FROM product").await
    }

    async fn count_categories(&self) -> Result<i64, RepositoryError> {
        self.count("SELECT COUNT(*) FROM category").await
    }

    async fn count_orders(&self) -> Result<i64, RepositoryError> {
        self.count("SELECT COUNT(*) FROM orders").await
    }

    async fn count_customers(&self) -> Result<i64, RepositoryError> {
        self.count("SELECT COUNT(*) FROM customer").await
    }
}
