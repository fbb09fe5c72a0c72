//! Страницы приложения
//!
//! - `page_labels` - заголовки страниц и список известных ключей
//! - `registry` - маппинг ключа страницы в View

pub mod page_labels;
pub mod registry;

pub use page_labels::{is_known_page, page_label_for_key, DEFAULT_PAGE};
pub use registry::render_page;
