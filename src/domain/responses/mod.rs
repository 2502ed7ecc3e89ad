mod category;
mod customer;
mod dashboard;
mod message;
mod order;
mod order_item;
mod product;
mod review;

pub use self::category::{CategoryCreatedResponse, CategoryResponse};
pub use self::customer::CustomerResponse;
pub use self::dashboard::DashboardMetricsResponse;
pub use self::message::MessageResponse;
pub use self::order::{OrderResponse, OrderWithItemsResponse};
pub use self::order_item::OrderItemResponse;
pub use self::product::{ProductCreatedResponse, ProductResponse};
pub use self::review::ReviewResponse;

use crate::errors::ServiceError;

/// Converts a decimal column fetched as text into a native JSON number.
/// The store never hands the client a string-encoded amount.
pub(crate) fn parse_money(column: &str, raw: &str) -> Result<f64, ServiceError> {
    raw.parse::<f64>()
        .map_err(|_| ServiceError::Internal(format!("non-numeric {column} value: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_money_accepts_decimal_text() {
        assert_eq!(parse_money("price", "129.99").unwrap(), 129.99);
        assert_eq!(parse_money("total_amount", "0.00").unwrap(), 0.0);
    }

    #[test]
    fn parse_money_rejects_garbage() {
        let err = parse_money("price", "12,99").unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
