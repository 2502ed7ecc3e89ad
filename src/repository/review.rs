use crate::{
    abstract_trait::ReviewRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Review,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ReviewRepository {
    db: ConnectionPool,
}

impl ReviewRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepositoryTrait for ReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT
                r.review_id,
                c.first_name AS customer_name,
                p.title AS product_name,
                r.rating,
                r.review_text,
                r.review_date
            FROM review r
            JOIN customer c ON r.customer_id = c.customer_id
            JOIN product p ON r.product_id = p.product_id
            ORDER BY r.review_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch reviews: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(reviews)
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM review WHERE review_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete review {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("🗑️ Deleted review {id} ({} rows)", result.rows_affected());
        Ok(result.rows_affected())
    }
}
