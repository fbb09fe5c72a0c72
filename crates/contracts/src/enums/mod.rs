pub mod customer_status;
pub mod order_status;
pub mod product_category;

pub use customer_status::CustomerStatus;
pub use order_status::OrderStatus;
pub use product_category::{ProductCategory, ProductStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        for category in ProductCategory::all() {
            assert_eq!(ProductCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ProductStatus::from_code("out_of_stock"), Some(ProductStatus::OutOfStock));
        assert_eq!(CustomerStatus::from_code("vip"), Some(CustomerStatus::Vip));
        assert_eq!(OrderStatus::from_code("all"), None);
    }

    #[test]
    fn serde_uses_the_same_codes() {
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn delivered_and_cancelled_orders_cannot_be_cancelled() {
        assert!(OrderStatus::Pending.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }
}
