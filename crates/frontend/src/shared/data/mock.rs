//! Детерминированные демо-данные для страниц-списков
use chrono::{DateTime, Duration, TimeZone, Utc};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::Order;
use contracts::domain::a003_customer::Customer;
use contracts::enums::{CustomerStatus, OrderStatus, ProductCategory, ProductStatus};

pub const PRODUCT_COUNT: usize = 24;
pub const ORDER_COUNT: usize = 45;
pub const CUSTOMER_COUNT: usize = 30;

const PRODUCT_NAMES: [&str; 24] = [
    "Wireless Headphones",
    "Cotton T-Shirt",
    "Ceramic Plant Pot",
    "Yoga Mat",
    "The Pragmatic Programmer",
    "Smart Watch",
    "Denim Jacket",
    "Desk Lamp, \"Nordic\" Edition",
    "Running Shoes",
    "Rust in Action",
    "Bluetooth Speaker",
    "Wool Scarf",
    "Garden Hose",
    "Dumbbell Set",
    "Clean Code",
    "USB-C Hub",
    "Rain Jacket",
    "Scented Candle",
    "Tennis Racket",
    "Designing Data-Intensive Applications",
    "Mechanical Keyboard",
    "Linen Shirt",
    "Throw Pillow",
    "Cycling Helmet",
];

const CUSTOMER_NAMES: [&str; 15] = [
    "Olivia Martin",
    "Jackson Lee",
    "Isabella Nguyen",
    "William Kim",
    "Sofia Davis",
    "Liam O'Brien",
    "Emma Wilson",
    "Noah Garcia",
    "Ava Thompson",
    "Lucas Brown",
    "Mia Rodriguez",
    "Ethan Clark",
    "Charlotte Lewis",
    "Mason Walker",
    "Amelia Hall",
];

const LOCATIONS: [&str; 6] = [
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Chicago, IL",
    "Denver, CO",
    "Boston, MA",
];

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

fn email_for(name: &str) -> String {
    let local: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .replace(' ', ".");
    format!("{}@example.com", local)
}

/// Цена с копейками из индекса: 9.99 .. 499.99
fn price_for(n: usize) -> f64 {
    let dollars = 9 + (n * 37) % 491;
    dollars as f64 + 0.99
}

pub fn products() -> Vec<Product> {
    let categories = ProductCategory::all();
    (1..=PRODUCT_COUNT)
        .map(|n| {
            let stock = ((n * 13) % 60) as u32;
            let status = if stock == 0 {
                ProductStatus::OutOfStock
            } else if n % 7 == 0 {
                ProductStatus::Draft
            } else {
                ProductStatus::Active
            };
            Product {
                id: format!("product-{}", n),
                name: PRODUCT_NAMES[n - 1].to_string(),
                sku: format!("SKU-{:05}", 10_000 + n * 17),
                category: categories[(n - 1) % categories.len()],
                price: price_for(n),
                stock,
                status,
                created_at: base_date() + Duration::days((n * 5) as i64),
            }
        })
        .collect()
}

fn order_status_for(n: usize) -> OrderStatus {
    match n % 9 {
        0 | 4 => OrderStatus::Cancelled,
        1 | 5 => OrderStatus::Delivered,
        2 | 6 => OrderStatus::Shipped,
        3 => OrderStatus::Processing,
        _ => OrderStatus::Pending,
    }
}

pub fn orders() -> Vec<Order> {
    (1..=ORDER_COUNT)
        .map(|n| {
            let customer = CUSTOMER_NAMES[(n * 7) % CUSTOMER_NAMES.len()];
            let cents = (n * 7919) % 90_000 + 2_000;
            Order {
                id: format!("order-{}", n),
                order_number: format!("ORD-{}", 1000 + n),
                customer_name: customer.to_string(),
                customer_email: email_for(customer),
                total: cents as f64 / 100.0,
                items: (1 + n % 5) as u32,
                status: order_status_for(n),
                created_at: base_date() + Duration::days((n * 4) as i64) + Duration::hours((n % 10) as i64),
            }
        })
        .collect()
}

pub fn customers() -> Vec<Customer> {
    (1..=CUSTOMER_COUNT)
        .map(|n| {
            let name = CUSTOMER_NAMES[(n - 1) % CUSTOMER_NAMES.len()];
            // вторая половина списка получает другие фамилии
            let name = if n > CUSTOMER_NAMES.len() {
                format!("{} Jr.", name)
            } else {
                name.to_string()
            };
            let orders_count = ((n * 3) % 17) as u32;
            let total_spent = orders_count as f64 * (40.0 + ((n * 11) % 60) as f64);
            let status = if orders_count == 0 {
                CustomerStatus::Inactive
            } else if total_spent > 1_000.0 {
                CustomerStatus::Vip
            } else {
                CustomerStatus::Active
            };
            Customer {
                id: format!("customer-{}", n),
                email: email_for(&name),
                phone: format!("+1 (555) {:03}-{:04}", 100 + n, (n * 271) % 10_000),
                location: LOCATIONS[n % LOCATIONS.len()].to_string(),
                orders_count,
                total_spent,
                status,
                joined_at: base_date() - Duration::days((n * 9) as i64),
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn collections_have_expected_sizes_and_unique_ids() {
        let products = products();
        let orders = orders();
        let customers = customers();
        assert_eq!(products.len(), PRODUCT_COUNT);
        assert_eq!(orders.len(), ORDER_COUNT);
        assert_eq!(customers.len(), CUSTOMER_COUNT);

        let ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), ORDER_COUNT);
        assert_eq!(orders[2].id, "order-3");
    }

    #[test]
    fn data_is_stable_between_calls() {
        assert_eq!(orders(), orders());
        assert_eq!(products(), products());
    }

    #[test]
    fn every_order_status_is_present() {
        let orders = orders();
        for status in OrderStatus::all() {
            assert!(orders.iter().any(|o| o.status == status), "{:?}", status);
        }
    }

    #[test]
    fn emails_are_ascii() {
        for customer in customers() {
            assert!(customer.email.is_ascii());
            assert!(!customer.email.contains(".."));
        }
    }
}
