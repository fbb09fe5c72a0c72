use serde::{Deserialize, Serialize};

/// Статус клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Vip,
}

impl CustomerStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Vip => "vip",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Vip => "VIP",
        }
    }

    pub fn all() -> Vec<CustomerStatus> {
        vec![
            CustomerStatus::Active,
            CustomerStatus::Inactive,
            CustomerStatus::Vip,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
