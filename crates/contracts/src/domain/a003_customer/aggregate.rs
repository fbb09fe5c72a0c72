use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::enums::CustomerStatus;

/// Клиент магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub orders_count: u32,
    pub total_spent: f64,
    pub status: CustomerStatus,
    pub joined_at: DateTime<Utc>,
}

impl Entity for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}
