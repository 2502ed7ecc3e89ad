use crate::{
    abstract_trait::{DashboardServiceTrait, DynDashboardRepository},
    domain::responses::DashboardMetricsResponse,
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct DashboardService {
    repository: DynDashboardRepository,
}

impl DashboardService {
    pub fn new(repository: DynDashboardRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn metrics(&self) -> Result<DashboardMetricsResponse, ServiceError> {
        let total_products = self.repository.count_products().await?;
        let total_categories = self.repository.count_categories().await?;
        let total_orders = self.repository.count_orders().await?;
        let total_customers = self.repository.count_customers().await?;

        Ok(DashboardMetricsResponse {
            total_products,
            total_categories,
            total_orders,
            total_customers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::DashboardRepositoryTrait, errors::RepositoryError};
    use std::sync::Arc;

    struct FixedCounts;

    #[async_trait]
    impl DashboardRepositoryTrait for FixedCounts {
        async fn count_products(&self) -> Result<i64, RepositoryError> {
            Ok(12)
        }

        async fn count_categories(&self) -> Result<i64, RepositoryError> {
            Ok(3)
        }

        async fn count_orders(&self) -> Result<i64, RepositoryError> {
            Ok(40)
        }

        async fn count_customers(&self) -> Result<i64, RepositoryError> {
            Ok(7)
        }
    }

    struct FailingCounts;

    #[async_trait]
    impl DashboardRepositoryTrait for FailingCounts {
        async fn count_products(&self) -> Result<i64, RepositoryError> {
            Err(RepositoryError::Sqlx(sqlx::Error::PoolClosed))
        }

        async fn count_categories(&self) -> Result<i64, RepositoryError> {
            Ok(3)
        }

        async fn count_orders(&self) -> Result<i64, RepositoryError> {
            Ok(40)
        }

        async fn count_customers(&self) -> Result<i64, RepositoryError> {
            Ok(7)
        }
    }

    #[tokio::test]
    async fn metrics_collect_all_four_counts() {
        let service = DashboardService::new(Arc::new(FixedCounts));

        let metrics = service.metrics().await.unwrap();

        assert_eq!(metrics.total_products, 12);
        assert_eq!(metrics.total_categories, 3);
        assert_eq!(metrics.total_orders, 40);
        assert_eq!(metrics.total_customers, 7);
    }

    #[tokio::test]
    async fn any_failing_count_fails_the_whole_request() {
        let service = DashboardService::new(Arc::new(FailingCounts));

        let err = service.metrics().await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
    }
}
