use crate::{
    abstract_trait::{DynOrderRepository, OrderServiceTrait},
    domain::{
        requests::UpdateOrderStatusRequest,
        responses::{MessageResponse, OrderItemResponse, OrderResponse, OrderWithItemsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct OrderService {
    repository: DynOrderRepository,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let orders = self.repository.find_all().await?;

        orders.into_iter().map(OrderResponse::try_from).collect()
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let affected = self.repository.update_status(id, req).await?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Order not found.".into()));
        }

        Ok(MessageResponse::new("Order status updated successfully."))
    }

    async fn search_by_customer(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderWithItemsResponse>, ServiceError> {
        let orders = self.repository.search_by_customer(customer_id).await?;

        orders
            .into_iter()
            .map(OrderWithItemsResponse::try_from)
            .collect()
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemResponse>, ServiceError> {
        let items = self.repository.find_items(order_id).await?;

        items.into_iter().map(OrderItemResponse::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderRepositoryTrait,
        errors::RepositoryError,
        model::{Order, OrderItem, OrderWithItems},
    };
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    struct InMemoryOrderRepository {
        orders: Mutex<Vec<Order>>,
        items: Mutex<Vec<(i32, OrderItem)>>,
    }

    impl InMemoryOrderRepository {
        fn new() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                items: Mutex::new(Vec::new()),
            }
        }
    }

    fn order(order_id: i32, customer_id: i32, total_amount: &str) -> Order {
        Order {
            order_id,
            customer_id,
            order_date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            order_status: "pending".into(),
            total_amount: total_amount.into(),
            shipping_address: Some("12 Main St".into()),
        }
    }

    #[async_trait]
    impl OrderRepositoryTrait for InMemoryOrderRepository {
        async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn update_status(
            &self,
            id: i32,
            req: &UpdateOrderStatusRequest,
        ) -> Result<u64, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            match orders.iter_mut().find(|o| o.order_id == id) {
                Some(row) => {
                    row.order_status = req.status.clone().unwrap_or_default();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn search_by_customer(
            &self,
            customer_id: Option<i32>,
        ) -> Result<Vec<OrderWithItems>, RepositoryError> {
            let orders = self.orders.lock().unwrap();
            let items = self.items.lock().unwrap();

            let mut found = Vec::new();
            for o in orders.iter().filter(|o| Some(o.customer_id) == customer_id) {
                let mut lines: Vec<&OrderItem> = items
                    .iter()
                    .filter(|(oid, _)| *oid == o.order_id)
                    .map(|(_, item)| item)
                    .collect();
                if lines.is_empty() {
                    continue;
                }
                lines.sort_by_key(|item| item.product_id);

                let aggregated = lines
                    .iter()
                    .map(|item| format!("{}:{}:{}", item.product_id, item.quantity, item.price))
                    .collect::<Vec<_>>()
                    .join("; ");

                found.push(OrderWithItems {
                    order_id: o.order_id,
                    customer_id: o.customer_id,
                    order_date: o.order_date,
                    order_status: o.order_status.clone(),
                    total_amount: o.total_amount.clone(),
                    shipping_address: o.shipping_address.clone(),
                    order_items: Some(aggregated),
                });
            }
            Ok(found)
        }

        async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|(oid, _)| *oid == order_id)
                .map(|(_, item)| item.clone())
                .collect())
        }
    }

    fn service_with(repo: InMemoryOrderRepository) -> OrderService {
        OrderService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn listing_coerces_total_amount_to_number() {
        let repo = InMemoryOrderRepository::new();
        repo.orders.lock().unwrap().push(order(1, 3, "149.50"));

        let orders = service_with(repo).find_all().await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total_amount, 149.50);
    }

    #[tokio::test]
    async fn non_numeric_total_amount_is_internal_error() {
        let repo = InMemoryOrderRepository::new();
        repo.orders.lock().unwrap().push(order(1, 3, "oops"));

        let err = service_with(repo).find_all().await.unwrap_err();

        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[tokio::test]
    async fn updating_missing_order_is_not_found() {
        let err = service_with(InMemoryOrderRepository::new())
            .update_status(
                99,
                &UpdateOrderStatusRequest {
                    status: Some("shipped".into()),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Order not found."));
    }

    #[tokio::test]
    async fn update_status_reports_success_message() {
        let repo = InMemoryOrderRepository::new();
        repo.orders.lock().unwrap().push(order(5, 3, "10.00"));

        let updated = service_with(repo)
            .update_status(
                5,
                &UpdateOrderStatusRequest {
                    status: Some("shipped".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.message, "Order status updated successfully.");
    }

    #[tokio::test]
    async fn search_aggregates_items_ordered_by_product_id() {
        let repo = InMemoryOrderRepository::new();
        repo.orders.lock().unwrap().push(order(1, 7, "59.97"));
        {
            let mut items = repo.items.lock().unwrap();
            items.push((
                1,
                OrderItem {
                    product_id: 9,
                    quantity: 1,
                    price: "19.99".into(),
                },
            ));
            items.push((
                1,
                OrderItem {
                    product_id: 2,
                    quantity: 2,
                    price: "19.99".into(),
                },
            ));
        }

        let found = service_with(repo).search_by_customer(Some(7)).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order_items, "2:2:19.99; 9:1:19.99");
        assert_eq!(found[0].total_amount, 59.97);
    }

    #[tokio::test]
    async fn search_without_customer_id_matches_nothing() {
        let repo = InMemoryOrderRepository::new();
        repo.orders.lock().unwrap().push(order(1, 7, "10.00"));

        let found = service_with(repo).search_by_customer(None).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn order_items_coerce_price_to_number() {
        let repo = InMemoryOrderRepository::new();
        repo.items.lock().unwrap().push((
            4,
            OrderItem {
                product_id: 11,
                quantity: 3,
                price: "24.99".into(),
            },
        ));

        let items = service_with(repo).find_items(4).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 24.99);
        assert_eq!(items[0].quantity, 3);
    }
}
