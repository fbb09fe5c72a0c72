use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::layout::pages::{is_known_page, DEFAULT_PAGE};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Ключ открытой страницы
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Синхронизирует открытую страницу с `#key` в адресной строке
    pub fn init_router_integration(&self) {
        let hash = window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let key = hash.trim_start_matches('#');
        if is_known_page(key) {
            self.open_page(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_hash = format!("#{}", this.active.get());
            let current_hash = window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();

            if current_hash != new_hash {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_hash));
                    }
                }
            }
        });
    }

    pub fn open_page(&self, key: &str) {
        if self.active.with_untracked(|active| active != key) {
            log::debug!("open page '{}'", key);
            self.active.set(key.to_string());
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
