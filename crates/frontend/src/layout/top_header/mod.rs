//! TopHeader component - application top bar.
//!
//! Sidebar toggle, application title, current viewport class and a shortcut to settings.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label_for_key;
use crate::shared::icons::icon;
use crate::shared::viewport::{use_viewport, ViewportClass};
use leptos::prelude::*;

fn viewport_label(class: ViewportClass) -> &'static str {
    match class {
        ViewportClass::Mobile => "Mobile",
        ViewportClass::Tablet => "Tablet",
        ViewportClass::Desktop => "Desktop",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let viewport = use_viewport();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
                <span class="top-header__page">
                    {move || ctx.active.with(|key| page_label_for_key(key).to_string())}
                </span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__viewport" title="Page size follows the screen class">
                    {icon("monitor")}
                    {move || viewport_label(viewport.get())}
                </span>
                <button
                    class="top-header__icon-btn"
                    title="Settings"
                    on:click=move |_| ctx.open_page("sys_settings")
                >
                    {icon("settings")}
                </button>
            </div>
        </div>
    }
}
