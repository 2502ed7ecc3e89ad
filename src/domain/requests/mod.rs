mod category;
mod order;
mod product;

pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::order::{SearchOrdersQuery, UpdateOrderStatusRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
