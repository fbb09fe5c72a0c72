use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::enums::{ProductCategory, ProductStatus};

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Стоимость остатка на складе
    pub fn stock_value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}
