mod category;
mod customer;
mod order;
mod order_item;
mod product;
mod review;

pub use self::category::Category;
pub use self::customer::Customer;
pub use self::order::{Order, OrderWithItems};
pub use self::order_item::OrderItem;
pub use self::product::Product;
pub use self::review::Review;
