use std::collections::BTreeMap;

use chrono::Datelike;

use super::dto::{CategoryCount, MonthlyRevenue, SalesOverview, StatusCount};
use crate::domain::a001_product::Product;
use crate::domain::a002_order::Order;
use crate::domain::a003_customer::Customer;
use crate::enums::{OrderStatus, ProductCategory};

/// Собирает сводку по текущему содержимому коллекций
pub fn build_overview(orders: &[Order], products: &[Product], customers: &[Customer]) -> SalesOverview {
    let revenue_orders: Vec<&Order> = orders.iter().filter(|o| o.counts_as_revenue()).collect();
    let total_revenue: f64 = revenue_orders.iter().map(|o| o.total).sum();
    let average_order_value = if revenue_orders.is_empty() {
        0.0
    } else {
        total_revenue / revenue_orders.len() as f64
    };

    let mut by_month: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for order in &revenue_orders {
        let key = (order.created_at.year(), order.created_at.month());
        let entry = by_month.entry(key).or_insert((0.0, 0));
        entry.0 += order.total;
        entry.1 += 1;
    }
    let revenue_by_month = by_month
        .into_iter()
        .map(|((year, month), (revenue, count))| MonthlyRevenue {
            period: format!("{:04}-{:02}", year, month),
            revenue,
            orders: count,
        })
        .collect();

    let orders_by_status = OrderStatus::all()
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: orders.iter().filter(|o| o.status == status).count(),
        })
        .collect();

    let products_by_category = ProductCategory::all()
        .into_iter()
        .map(|category| {
            let in_category = products.iter().filter(|p| p.category == category);
            let (count, stock_value) =
                in_category.fold((0, 0.0), |(n, v), p| (n + 1, v + p.stock_value()));
            CategoryCount {
                category,
                count,
                stock_value,
            }
        })
        .collect();

    SalesOverview {
        total_revenue,
        orders_count: orders.len(),
        average_order_value,
        customers_count: customers.len(),
        revenue_by_month,
        orders_by_status,
        products_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: u32, total: f64, status: OrderStatus, month: u32) -> Order {
        Order {
            id: format!("order-{}", id),
            order_number: format!("ORD-{:04}", 1000 + id),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@example.com".to_string(),
            total,
            items: 1,
            status,
            created_at: Utc.with_ymd_and_hms(2026, month, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn cancelled_orders_are_excluded_from_revenue() {
        let orders = vec![
            order(1, 100.0, OrderStatus::Delivered, 1),
            order(2, 50.0, OrderStatus::Cancelled, 1),
            order(3, 200.0, OrderStatus::Pending, 2),
        ];
        let overview = build_overview(&orders, &[], &[]);

        assert_eq!(overview.total_revenue, 300.0);
        assert_eq!(overview.orders_count, 3);
        assert_eq!(overview.average_order_value, 150.0);
    }

    #[test]
    fn revenue_is_grouped_by_month_in_order() {
        let orders = vec![
            order(1, 30.0, OrderStatus::Shipped, 3),
            order(2, 10.0, OrderStatus::Delivered, 1),
            order(3, 20.0, OrderStatus::Delivered, 1),
        ];
        let overview = build_overview(&orders, &[], &[]);

        let periods: Vec<&str> = overview
            .revenue_by_month
            .iter()
            .map(|m| m.period.as_str())
            .collect();
        assert_eq!(periods, vec!["2026-01", "2026-03"]);
        assert_eq!(overview.revenue_by_month[0].revenue, 30.0);
        assert_eq!(overview.revenue_by_month[0].orders, 2);
    }

    #[test]
    fn every_status_is_listed_even_when_empty() {
        let orders = vec![order(1, 10.0, OrderStatus::Cancelled, 1)];
        let overview = build_overview(&orders, &[], &[]);

        assert_eq!(overview.orders_by_status.len(), OrderStatus::all().len());
        let cancelled = overview
            .orders_by_status
            .iter()
            .find(|s| s.status == OrderStatus::Cancelled)
            .map(|s| s.count);
        assert_eq!(cancelled, Some(1));
        assert_eq!(overview.average_order_value, 0.0);
    }
}
