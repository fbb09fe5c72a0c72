//! Registry страниц - единственный источник правды для маппинга ключа в View

use leptos::prelude::*;

use crate::dashboards::SalesOverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::system::settings::ui::SettingsPage;

pub fn render_page(key: &str) -> AnyView {
    match key {
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_order" => view! { <OrderList /> }.into_any(),
        "a003_customer" => view! { <CustomerList /> }.into_any(),
        "d400_sales_overview" => view! { <SalesOverviewDashboard /> }.into_any(),
        "sys_settings" => view! { <SettingsPage /> }.into_any(),
        _ => {
            log::warn!("unknown page key: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
