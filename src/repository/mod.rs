mod category;
mod customer;
mod dashboard;
mod order;
mod product;
mod review;

pub use self::category::CategoryRepository;
pub use self::customer::CustomerRepository;
pub use self::dashboard::DashboardRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::review::ReviewRepository;
