use serde::{Deserialize, Serialize};

use crate::enums::{OrderStatus, ProductCategory};

/// Сводка для дашборда аналитики
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    /// Выручка без отменённых заказов
    pub total_revenue: f64,
    pub orders_count: usize,
    /// Средний чек по неотменённым заказам, 0 если таких нет
    pub average_order_value: f64,
    pub customers_count: usize,
    /// Выручка по месяцам в хронологическом порядке
    pub revenue_by_month: Vec<MonthlyRevenue>,
    /// Все статусы в порядке `OrderStatus::all()`, включая нулевые
    pub orders_by_status: Vec<StatusCount>,
    pub products_by_category: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Period in format "YYYY-MM"
    pub period: String,
    pub revenue: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: ProductCategory,
    pub count: usize,
    pub stock_value: f64,
}
