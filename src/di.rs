use crate::{
    abstract_trait::{
        DynCategoryRepository, DynCategoryService, DynCustomerRepository, DynCustomerService,
        DynDashboardRepository, DynDashboardService, DynOrderRepository, DynOrderService,
        DynProductRepository, DynProductService, DynReviewRepository, DynReviewService,
    },
    config::ConnectionPool,
    repository::{
        CategoryRepository, CustomerRepository, DashboardRepository, OrderRepository,
        ProductRepository, ReviewRepository,
    },
    service::{
        CategoryService, CustomerService, DashboardService, OrderService, ProductService,
        ReviewService,
    },
};
use std::{fmt, sync::Arc};

/// Service container built once at startup and shared through `AppState`;
/// handlers only ever see the trait objects.
#[derive(Clone)]
pub struct DependenciesInject {
    pub dashboard_service: DynDashboardService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub customer_service: DynCustomerService,
    pub review_service: DynReviewService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("dashboard_service", &"<DashboardService>")
            .field("category_service", &"<CategoryService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("customer_service", &"<CustomerService>")
            .field("review_service", &"<ReviewService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let dashboard_repository =
            Arc::new(DashboardRepository::new(pool.clone())) as DynDashboardRepository;
        let category_repository =
            Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let order_repository = Arc::new(OrderRepository::new(pool.clone())) as DynOrderRepository;
        let customer_repository =
            Arc::new(CustomerRepository::new(pool.clone())) as DynCustomerRepository;
        let review_repository = Arc::new(ReviewRepository::new(pool)) as DynReviewRepository;

        let dashboard_service =
            Arc::new(DashboardService::new(dashboard_repository)) as DynDashboardService;
        let category_service =
            Arc::new(CategoryService::new(category_repository)) as DynCategoryService;
        let product_service = Arc::new(ProductService::new(product_repository)) as DynProductService;
        let order_service = Arc::new(OrderService::new(order_repository)) as DynOrderService;
        let customer_service =
            Arc::new(CustomerService::new(customer_repository)) as DynCustomerService;
        let review_service = Arc::new(ReviewService::new(review_repository)) as DynReviewService;

        Self {
            dashboard_service,
            category_service,
            product_service,
            order_service,
            customer_service,
            review_service,
        }
    }
}
