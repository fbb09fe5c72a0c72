use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::render_page;
use leptos::prelude::*;

/// Центральная зона: страница пересоздаётся при каждой смене ключа,
/// поэтому состояние списка не переживает навигацию
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-page" style="flex: 1; overflow: auto;">
            {move || {
                let key = ctx.active.get();
                render_page(&key)
            }}
        </div>
    }
}
