use dioxus::prelude::*;

use crate::{
    domain::{
        history::{change_percent, price_history, series_high, series_low},
        City,
    },
    ui::{
        components::{history_chart::HistoryChart, kpi_card::KpiCard},
        format_currency,
    },
};

#[component]
pub fn HistoryPage() -> Element {
    let mut selected_city = use_signal(|| City::ALL[0]);

    let city = selected_city();
    let points = price_history(city);
    let low = series_low(&points);
    let high = series_high(&points);
    let change = change_percent(&points);
    let chart_title = format!("Typical home price in {}", city.name());

    rsx! {
        div { class: "page-stack",
            section { class: "panel",
                h2 { class: "panel-title", "Price History" }
                label { class: "field-label", "City" }
                select {
                    class: "input input-inline",
                    value: city.name(),
                    onchange: move |evt| {
                        if let Some(choice) = City::from_name(&evt.value()) {
                            selected_city.set(choice);
                        }
                    },
                    for option_city in City::ALL {
                        option { value: option_city.name(), "{option_city.name()}" }
                    }
                }
            }
            section { class: "kpi-grid",
                KpiCard {
                    title: "12-Month Low".to_string(),
                    value: format_currency(low),
                    description: Some("Seasonal trough".to_string()),
                }
                KpiCard {
                    title: "12-Month High".to_string(),
                    value: format_currency(high),
                    description: Some("Seasonal peak".to_string()),
                }
                KpiCard {
                    title: "Yearly Change".to_string(),
                    value: format!("{change:+.1}%"),
                    description: Some("January to December".to_string()),
                }
            }
            section { class: "panel",
                h2 { class: "panel-title", "{chart_title}" }
                HistoryChart { points }
            }
        }
    }
}
