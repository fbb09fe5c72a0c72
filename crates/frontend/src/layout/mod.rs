pub mod center;
pub mod global_context;
pub mod left;
pub mod notification_service;
pub mod pages;
pub mod top_header;

use center::Center;
use left::{Left, Sidebar};
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |          (Center)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Left>
                    <Sidebar />
                </Left>

                <div class="app-main">
                    <Center />
                </div>
            </div>
        </div>
    }
}
