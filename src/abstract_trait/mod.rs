mod category;
mod customer;
mod dashboard;
mod order;
mod product;
mod review;

pub use self::category::{
    CategoryRepositoryTrait, CategoryServiceTrait, DynCategoryRepository, DynCategoryService,
};
pub use self::customer::{
    CustomerRepositoryTrait, CustomerServiceTrait, DynCustomerRepository, DynCustomerService,
};
pub use self::dashboard::{
    DashboardRepositoryTrait, DashboardServiceTrait, DynDashboardRepository, DynDashboardService,
};
pub use self::order::{DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::review::{
    DynReviewRepository, DynReviewService, ReviewRepositoryTrait, ReviewServiceTrait,
};
