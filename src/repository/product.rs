use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                p.product_id,
                p.title,
                p.model,
                p.description,
                p.stock,
                p.category_id,
                p.manufacturer,
                p.features,
                p.price::TEXT AS price,
                p.image_url,
                p.rating::TEXT AS rating,
                p.stock_status,
                p.dimensions,
                c.title AS category_name
            FROM product p
            JOIN category c ON p.category_id = c.category_id
            ORDER BY p.product_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO product
                (title, model, description, stock, category_id, manufacturer,
                 features, price, image_url, rating, stock_status, dimensions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8::NUMERIC, $9, $10::NUMERIC, $11, $12)
            RETURNING product_id
            "#,
        )
        .bind(req.title.as_deref())
        .bind(req.model.as_deref())
        .bind(req.description.as_deref())
        .bind(req.stock)
        .bind(req.category_id)
        .bind(req.manufacturer.as_deref())
        .bind(req.features.as_deref())
        .bind(req.price)
        .bind(req.image_url.as_deref())
        .bind(req.rating)
        .bind(req.stock_status.as_deref())
        .bind(req.dimensions.as_deref())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Created product ID {id}");
        Ok(id)
    }

    async fn update(&self, id: i32, req: &UpdateProductRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Full replace of every column, not a partial patch.
        let result = sqlx::query(
            r#"
            UPDATE product
            SET title = $1,
                model = $2,
                description = $3,
                stock = $4,
                category_id = $5,
                manufacturer = $6,
                features = $7,
                price = $8::NUMERIC,
                image_url = $9,
                rating = $10::NUMERIC,
                stock_status = $11,
                dimensions = $12
            WHERE product_id = $13
            "#,
        )
        .bind(req.title.as_deref())
        .bind(req.model.as_deref())
        .bind(req.description.as_deref())
        .bind(req.stock)
        .bind(req.category_id)
        .bind(req.manufacturer.as_deref())
        .bind(req.features.as_deref())
        .bind(req.price)
        .bind(req.image_url.as_deref())
        .bind(req.rating)
        .bind(req.stock_status.as_deref())
        .bind(req.dimensions.as_deref())
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update product {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM product WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }
}
