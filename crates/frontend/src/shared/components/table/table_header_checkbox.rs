//! Компонент чекбокса в заголовке таблицы для выбора всех строк текущей страницы
//!
//! # Примеры
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     visible_ids=Signal::derive(move || page_ids())
//!     selection=Signal::derive(move || state.with(|s| s.selection.clone()))
//!     on_change=Callback::new(move |checked: bool| {
//!         state.update(|s| s.selection.toggle_all(page_ids(), checked));
//!     })
//! />
//! ```

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::selection::{HeaderCheckState, SelectionSet};

/// Компонент чекбокса в заголовке таблицы
///
/// Показывает три состояния: unchecked, checked, indeterminate.
/// Снятие флажка очищает весь выбор, а не только текущую страницу.
#[component]
pub fn TableHeaderCheckbox(
    /// ID строк на текущей странице
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    /// Текущий выбор
    #[prop(into)]
    selection: Signal<SelectionSet>,

    /// Callback при изменении (true = выбрать страницу, false = снять всё)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let ids = visible_ids.get();
        selection.with(|sel| sel.header_state(ids.iter().map(String::as_str)))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate доступно только через DOM-свойство
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, HeaderCheckState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select page"
                prop:checked=move || matches!(checkbox_state.get(), HeaderCheckState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}
