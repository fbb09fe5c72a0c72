use crate::shared::components::table::{format_currency, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its number
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueFormat {
    Currency { fraction_digits: u8 },
    Integer,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Currency { fraction_digits } => format_currency(val, fraction_digits),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_and_integers() {
        assert_eq!(format_value(1234.5, ValueFormat::Currency { fraction_digits: 2 }), "$1,234.50");
        assert_eq!(format_value(45.0, ValueFormat::Integer), "45");
    }
}
