//! Настройки приложения.
//!
//! Хранятся в `localStorage` как JSON. Отсутствующие поля берутся из
//! значений по умолчанию, повреждённый JSON игнорируется целиком.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::viewport::PageSizes;

pub const SETTINGS_STORAGE_KEY: &str = "admin_dashboard_settings";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Окно тишины для строки поиска
    pub search_debounce_ms: u32,
    /// Имитация задержки загрузки списка
    pub loading_delay_ms: u32,
    /// Имитация задержки массового действия
    pub bulk_action_delay_ms: u32,
    pub notification_duration_ms: u32,
    pub page_sizes: PageSizes,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            loading_delay_ms: 800,
            bulk_action_delay_ms: 1000,
            notification_duration_ms: 4000,
            page_sizes: PageSizes::default(),
        }
    }
}

impl AppSettings {
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Читает настройки из `localStorage`
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(SETTINGS_STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let storage = web_sys::window()
            .ok_or("No window object")?
            .local_storage()
            .map_err(|e| format!("Storage unavailable: {:?}", e))?
            .ok_or("Storage unavailable")?;
        storage
            .set_item(SETTINGS_STORAGE_KEY, &self.to_json())
            .map_err(|e| format!("Failed to store settings: {:?}", e))?;
        log::info!("settings saved");
        Ok(())
    }
}

pub fn provide_settings() -> RwSignal<AppSettings> {
    let settings = RwSignal::new(AppSettings::load());
    provide_context(settings);
    settings
}

pub fn use_settings() -> RwSignal<AppSettings> {
    use_context::<RwSignal<AppSettings>>().unwrap_or_else(|| RwSignal::new(AppSettings::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = AppSettings::from_json(r#"{"search_debounce_ms": 150, "page_sizes": {"mobile": 3}}"#);
        assert_eq!(settings.search_debounce_ms, 150);
        assert_eq!(settings.loading_delay_ms, 800);
        assert_eq!(settings.page_sizes.mobile, 3);
        assert_eq!(settings.page_sizes.desktop, 10);
    }

    #[test]
    fn broken_json_gives_defaults() {
        assert_eq!(AppSettings::from_json("{not json"), AppSettings::default());
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let settings = AppSettings {
            bulk_action_delay_ms: 50,
            ..AppSettings::default()
        };
        assert_eq!(AppSettings::from_json(&settings.to_json()), settings);
    }
}
