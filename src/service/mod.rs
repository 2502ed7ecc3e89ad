mod category;
mod customer;
mod dashboard;
mod order;
mod product;
mod review;

pub use self::category::CategoryService;
pub use self::customer::CustomerService;
pub use self::dashboard::DashboardService;
pub use self::order::OrderService;
pub use self::product::ProductService;
pub use self::review::ReviewService;
