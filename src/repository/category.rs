use crate::{
    abstract_trait::CategoryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories =
            sqlx::query_as::<_, Category>("SELECT category_id, title FROM category")
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to fetch categories: {e:?}");
                    RepositoryError::from(e)
                })?;

        Ok(categories)
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // No presence check here on purpose: a NULL title trips the store's
        // NOT NULL constraint and surfaces as a query error.
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO category (title) VALUES ($1) RETURNING category_id",
        )
        .bind(req.title.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create category: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created category ID {id}");
        Ok(id)
    }

    async fn update(&self, id: i32, req: &UpdateCategoryRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE category SET title = $1 WHERE category_id = $2")
            .bind(req.title.as_deref())
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update category {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM category WHERE category_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
