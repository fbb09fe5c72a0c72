use contracts::dashboards::d400_sales_overview::{build_overview, SalesOverview};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::table::{format_currency, format_number_int};
use crate::shared::components::{BarChart, BarDatum, PageHeader, StatCard, ValueFormat};
use crate::shared::config::use_settings;
use crate::shared::data::mock;
use crate::shared::date_utils::format_period;

/// Выручка по месяцам, подписи в целых долларах
pub fn revenue_bars(overview: &SalesOverview) -> Vec<BarDatum> {
    overview
        .revenue_by_month
        .iter()
        .map(|m| BarDatum {
            label: format_period(&m.period),
            value: m.revenue,
            caption: format_currency(m.revenue, 0),
        })
        .collect()
}

pub fn status_bars(overview: &SalesOverview) -> Vec<BarDatum> {
    overview
        .orders_by_status
        .iter()
        .map(|s| BarDatum {
            label: s.status.display_name().to_string(),
            value: s.count as f64,
            caption: s.count.to_string(),
        })
        .collect()
}

pub fn category_bars(overview: &SalesOverview) -> Vec<BarDatum> {
    overview
        .products_by_category
        .iter()
        .map(|c| BarDatum {
            label: c.category.display_name().to_string(),
            value: c.stock_value,
            caption: format_currency(c.stock_value, 0),
        })
        .collect()
}

/// Sales Overview dashboard: summary cards and bar charts over the demo data
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let settings = use_settings();
    let (data, set_data) = signal(None::<SalesOverview>);

    let loading_delay = settings.with_untracked(|s| s.loading_delay_ms);
    spawn_local(async move {
        TimeoutFuture::new(loading_delay).await;
        let overview = build_overview(&mock::orders(), &mock::products(), &mock::customers());
        log::debug!(
            "sales overview: {} months, revenue {}",
            overview.revenue_by_month.len(),
            format_number_int(overview.total_revenue)
        );
        set_data.try_set(Some(overview));
    });

    let value_of = move |f: fn(&SalesOverview) -> f64| Signal::derive(move || data.with(|d| d.as_ref().map(f)));

    view! {
        <div class="page" data-page-id="d400_sales_overview">
            <PageHeader title="Analytics" subtitle="Revenue, orders and catalog at a glance".to_string() />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Revenue".to_string()
                        icon_name="analytics".to_string()
                        value=value_of(|d| d.total_revenue)
                        format=ValueFormat::Currency { fraction_digits: 2 }
                        subtitle=Signal::derive(|| Some("Cancelled orders excluded".to_string()))
                    />
                    <StatCard
                        label="Orders".to_string()
                        icon_name="orders".to_string()
                        value=value_of(|d| d.orders_count as f64)
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Average Order".to_string()
                        icon_name="analytics".to_string()
                        value=value_of(|d| d.average_order_value)
                        format=ValueFormat::Currency { fraction_digits: 2 }
                    />
                    <StatCard
                        label="Customers".to_string()
                        icon_name="customers".to_string()
                        value=value_of(|d| d.customers_count as f64)
                        format=ValueFormat::Integer
                    />
                </div>

                <div class="chart-grid">
                    <BarChart
                        title="Revenue by month"
                        data=Signal::derive(move || data.with(|d| d.as_ref().map(revenue_bars).unwrap_or_default()))
                    />
                    <BarChart
                        title="Orders by status"
                        data=Signal::derive(move || data.with(|d| d.as_ref().map(status_bars).unwrap_or_default()))
                    />
                    <BarChart
                        title="Stock value by category"
                        data=Signal::derive(move || data.with(|d| d.as_ref().map(category_bars).unwrap_or_default()))
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview() -> SalesOverview {
        build_overview(&mock::orders(), &mock::products(), &mock::customers())
    }

    #[test]
    fn status_bars_cover_every_status() {
        let o = overview();
        let bars = status_bars(&o);
        assert_eq!(bars.len(), o.orders_by_status.len());
        let total: f64 = bars.iter().map(|b| b.value).sum();
        assert_eq!(total as usize, mock::ORDER_COUNT);
        let cancelled = bars.iter().find(|b| b.label == "Cancelled").unwrap();
        assert_eq!(cancelled.caption, "10");
    }

    #[test]
    fn revenue_bars_use_readable_month_labels() {
        let o = overview();
        let bars = revenue_bars(&o);
        assert_eq!(bars.len(), o.revenue_by_month.len());
        assert!(bars[0].label.ends_with("2026"));
        assert!(bars.iter().all(|b| b.caption.starts_with('$')));
        let sum: f64 = bars.iter().map(|b| b.value).sum();
        assert!((sum - o.total_revenue).abs() < 1e-6);
    }
}
