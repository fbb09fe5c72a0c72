//! Классификация ширины окна и выбор размера страницы
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn classify(width_px: f64) -> Self {
        if width_px < TABLET_MIN_WIDTH {
            ViewportClass::Mobile
        } else if width_px < DESKTOP_MIN_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Размер страницы для каждого класса экрана
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            mobile: 5,
            tablet: 8,
            desktop: 10,
        }
    }
}

impl PageSizes {
    pub fn for_viewport(&self, class: ViewportClass) -> usize {
        let size = match class {
            ViewportClass::Mobile => self.mobile,
            ViewportClass::Tablet => self.tablet,
            ViewportClass::Desktop => self.desktop,
        };
        size.max(1)
    }
}

#[derive(Clone, Copy)]
pub struct ViewportContext(pub ReadSignal<ViewportClass>);

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DESKTOP_MIN_WIDTH)
}

/// Создаёт сигнал класса экрана, обновляемый по событию `resize`
pub fn provide_viewport() {
    let (class, set_class) = signal(ViewportClass::classify(current_width()));

    let _ = window_event_listener(leptos::ev::resize, move |_| {
        let next = ViewportClass::classify(current_width());
        if class.get_untracked() != next {
            log::debug!("viewport class changed to {:?}", next);
            set_class.set(next);
        }
    });

    provide_context(ViewportContext(class));
}

pub fn use_viewport() -> Signal<ViewportClass> {
    match use_context::<ViewportContext>() {
        Some(ViewportContext(class)) => class.into(),
        None => Signal::derive(|| ViewportClass::Desktop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_to_classes() {
        assert_eq!(ViewportClass::classify(375.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(767.9), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(768.0), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1023.0), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(1440.0), ViewportClass::Desktop);
    }

    #[test]
    fn page_size_follows_viewport_and_is_never_zero() {
        let sizes = PageSizes::default();
        assert_eq!(sizes.for_viewport(ViewportClass::Mobile), 5);
        assert_eq!(sizes.for_viewport(ViewportClass::Tablet), 8);
        assert_eq!(sizes.for_viewport(ViewportClass::Desktop), 10);

        let broken = PageSizes {
            mobile: 0,
            ..PageSizes::default()
        };
        assert_eq!(broken.for_viewport(ViewportClass::Mobile), 1);
    }
}
