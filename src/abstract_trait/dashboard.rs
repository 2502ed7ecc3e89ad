use crate::{
    domain::responses::DashboardMetricsResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDashboardRepository = Arc<dyn DashboardRepositoryTrait + Send + Sync>;
pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

/// Each count is its own statement; the dashboard endpoint runs all four.
#[async_trait]
pub trait DashboardRepositoryTrait {
    async fn count_products(&self) -> Result<i64, RepositoryError>;
    async fn count_categories(&self) -> Result<i64, RepositoryError>;
    async fn count_orders(&self) -> Result<i64, RepositoryError>;
    async fn count_customers(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait DashboardServiceTrait {
    async fn metrics(&self) -> Result<DashboardMetricsResponse, ServiceError>;
}
