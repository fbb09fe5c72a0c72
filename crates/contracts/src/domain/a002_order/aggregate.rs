use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::enums::OrderStatus;

/// Заказ
///
/// Покупатель хранится денормализованно (имя и email), ссылки на
/// запись клиента нет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub items: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Заказ учитывается в выручке, если он не отменён
    pub fn counts_as_revenue(&self) -> bool {
        self.status != OrderStatus::Cancelled
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}
