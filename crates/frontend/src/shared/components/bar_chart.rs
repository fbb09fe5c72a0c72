use leptos::prelude::*;

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 36.0;
const BAR_GAP: f64 = 16.0;
const LABEL_SPACE: f64 = 24.0;

/// One bar of a [`BarChart`]
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Text shown above the bar
    pub caption: String,
}

/// Bar height in px for `value` against the largest value of the series
pub fn bar_height(value: f64, max: f64, chart_height: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * chart_height).min(chart_height)
}

/// BarChart - inline SVG column chart
#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    #[prop(into)] data: Signal<Vec<BarDatum>>,
) -> impl IntoView {
    let width = move || {
        let n = data.with(|d| d.len()) as f64;
        (n * (BAR_WIDTH + BAR_GAP) + BAR_GAP).max(BAR_WIDTH + 2.0 * BAR_GAP)
    };
    let total_height = CHART_HEIGHT + 2.0 * LABEL_SPACE;

    view! {
        <div class="bar-chart">
            <div class="bar-chart__title">{title}</div>
            {move || {
                let items = data.get();
                if items.is_empty() {
                    return view! { <div class="bar-chart__empty">"No data"</div> }.into_any();
                }
                let max = items.iter().map(|d| d.value).fold(0.0_f64, f64::max);
                let bars = items
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| {
                        let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
                        let h = bar_height(d.value, max, CHART_HEIGHT);
                        let y = LABEL_SPACE + CHART_HEIGHT - h;
                        let cx = x + BAR_WIDTH / 2.0;
                        view! {
                            <g class="bar-chart__bar">
                                <rect x=x y=y width=BAR_WIDTH height=h rx="3"></rect>
                                <text x=cx y=y - 6.0 text-anchor="middle" class="bar-chart__caption">
                                    {d.caption}
                                </text>
                                <text
                                    x=cx
                                    y=LABEL_SPACE + CHART_HEIGHT + 16.0
                                    text-anchor="middle"
                                    class="bar-chart__label"
                                >
                                    {d.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();
                view! {
                    <svg
                        width=width
                        height=total_height
                        viewBox=move || format!("0 0 {} {}", width(), total_height)
                    >
                        {bars}
                    </svg>
                }
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_value_fills_the_chart() {
        assert_eq!(bar_height(50.0, 50.0, 160.0), 160.0);
        assert_eq!(bar_height(25.0, 50.0, 160.0), 80.0);
    }

    #[test]
    fn empty_or_negative_values_have_no_height() {
        assert_eq!(bar_height(0.0, 50.0, 160.0), 0.0);
        assert_eq!(bar_height(-3.0, 50.0, 160.0), 0.0);
        assert_eq!(bar_height(10.0, 0.0, 160.0), 0.0);
    }
}
