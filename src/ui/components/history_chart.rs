use dioxus::prelude::*;

use crate::domain::HistoryPoint;
use crate::ui::format_currency;

/// Bar chart over a monthly series. Bars are plain divs scaled against the
/// series range so no drawing dependency is needed.
#[component]
pub fn HistoryChart(points: Vec<HistoryPoint>) -> Element {
    if points.is_empty() {
        return rsx! { p { class: "cell-muted", "No history available." } };
    }

    let high = points.iter().map(|point| point.price).fold(0.0, f64::max);
    let low = points
        .iter()
        .map(|point| point.price)
        .fold(f64::INFINITY, f64::min);
    let span = (high - low).max(1.0);

    // Lowest bar sits at 40% so small month-to-month moves stay visible.
    let columns: Vec<(String, String, String)> = points
        .into_iter()
        .map(|point| {
            let height = 40.0 + 60.0 * (point.price - low) / span;
            (
                point.month.to_string(),
                format!("{height:.1}"),
                format!("{}: {}", point.month, format_currency(point.price)),
            )
        })
        .collect();

    rsx! {
        div {
            class: "chart",
            for (month, height, tooltip) in columns {
                div {
                    class: "chart-column",
                    div {
                        class: "chart-bar",
                        style: "height: {height}%",
                        title: "{tooltip}",
                    }
                    span { class: "chart-label", "{month}" }
                }
            }
        }
    }
}
