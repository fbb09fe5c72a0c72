//! Текстовая модель формы настроек и её проверка

use crate::shared::config::AppSettings;
use crate::shared::viewport::PageSizes;

/// Максимальная задержка, которую допускает форма
pub const MAX_DELAY_MS: u32 = 60_000;
pub const MAX_PAGE_SIZE: usize = 100;

/// Значения полей формы в том виде, в каком их ввёл пользователь
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub search_debounce_ms: String,
    pub loading_delay_ms: String,
    pub bulk_action_delay_ms: String,
    pub notification_duration_ms: String,
    pub page_size_mobile: String,
    pub page_size_tablet: String,
    pub page_size_desktop: String,
}

impl From<&AppSettings> for SettingsForm {
    fn from(s: &AppSettings) -> Self {
        Self {
            search_debounce_ms: s.search_debounce_ms.to_string(),
            loading_delay_ms: s.loading_delay_ms.to_string(),
            bulk_action_delay_ms: s.bulk_action_delay_ms.to_string(),
            notification_duration_ms: s.notification_duration_ms.to_string(),
            page_size_mobile: s.page_sizes.mobile.to_string(),
            page_size_tablet: s.page_sizes.tablet.to_string(),
            page_size_desktop: s.page_sizes.desktop.to_string(),
        }
    }
}

fn parse_delay(label: &str, raw: &str) -> Result<u32, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{}: enter a whole number of milliseconds", label))?;
    if value > MAX_DELAY_MS {
        return Err(format!("{}: must not exceed {} ms", label, MAX_DELAY_MS));
    }
    Ok(value)
}

fn parse_page_size(label: &str, raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("{}: enter a whole number", label))?;
    if value == 0 || value > MAX_PAGE_SIZE {
        return Err(format!("{}: must be between 1 and {}", label, MAX_PAGE_SIZE));
    }
    Ok(value)
}

impl SettingsForm {
    /// Проверяет все поля; возвращает первую ошибку
    pub fn to_settings(&self) -> Result<AppSettings, String> {
        Ok(AppSettings {
            search_debounce_ms: parse_delay("Search debounce", &self.search_debounce_ms)?,
            loading_delay_ms: parse_delay("Loading delay", &self.loading_delay_ms)?,
            bulk_action_delay_ms: parse_delay("Bulk action delay", &self.bulk_action_delay_ms)?,
            notification_duration_ms: parse_delay("Notification duration", &self.notification_duration_ms)?,
            page_sizes: PageSizes {
                mobile: parse_page_size("Mobile page size", &self.page_size_mobile)?,
                tablet: parse_page_size("Tablet page size", &self.page_size_tablet)?,
                desktop: parse_page_size("Desktop page size", &self.page_size_desktop)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_the_form() {
        let defaults = AppSettings::default();
        let form = SettingsForm::from(&defaults);
        assert_eq!(form.to_settings(), Ok(defaults));
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut form = SettingsForm::from(&AppSettings::default());
        form.search_debounce_ms = " 150 ".to_string();
        assert_eq!(form.to_settings().unwrap().search_debounce_ms, 150);
    }

    #[test]
    fn invalid_values_name_the_field() {
        let mut form = SettingsForm::from(&AppSettings::default());
        form.page_size_tablet = "0".to_string();
        let err = form.to_settings().unwrap_err();
        assert!(err.starts_with("Tablet page size"));

        let mut form = SettingsForm::from(&AppSettings::default());
        form.loading_delay_ms = "soon".to_string();
        let err = form.to_settings().unwrap_err();
        assert!(err.starts_with("Loading delay"));

        let mut form = SettingsForm::from(&AppSettings::default());
        form.bulk_action_delay_ms = (MAX_DELAY_MS + 1).to_string();
        assert!(form.to_settings().is_err());
    }
}
