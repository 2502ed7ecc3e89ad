use crate::{
    abstract_trait::OrderRepositoryTrait,
    config::ConnectionPool,
    domain::requests::UpdateOrderStatusRequest,
    errors::RepositoryError,
    model::{Order, OrderItem, OrderWithItems},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT
                order_id,
                customer_id,
                order_date,
                order_status,
                total_amount::TEXT AS total_amount,
                shipping_address
            FROM orders
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE orders SET order_status = $1 WHERE order_id = $2")
            .bind(req.status.as_deref())
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update status of order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("🔄 Updated status of order {id}");
        Ok(result.rows_affected())
    }

    async fn search_by_customer(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderWithItems>, RepositoryError> {
        info!("🔍 Searching orders for customer: {customer_id:?}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderWithItems>(
            r#"
            SELECT
                o.order_id,
                o.customer_id,
                o.order_date,
                o.order_status,
                o.total_amount::TEXT AS total_amount,
                o.shipping_address,
                STRING_AGG(
                    oi.product_id::TEXT || ':' || oi.quantity::TEXT || ':' || oi.price::TEXT,
                    '; ' ORDER BY oi.product_id
                ) AS order_items
            FROM orders o
            JOIN order_item oi ON o.order_id = oi.order_id
            WHERE o.customer_id = $1
            GROUP BY o.order_id, o.customer_id, o.order_date, o.order_status,
                     o.total_amount, o.shipping_address
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to search orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT
                product_id,
                quantity,
                price::TEXT AS price
            FROM order_item
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
