use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::AppState,
    ui::{
        components::{
            kpi_card::KpiCard,
            saved_table::SavedPropertyTable,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format_currency,
    },
};

#[component]
pub fn ComparePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let rows = state.with(|st| st.saved_properties.clone());
    let count = rows.len();
    let average_price = if count == 0 {
        0.0
    } else {
        rows.iter().map(|property| property.price).sum::<f64>() / count as f64
    };
    let best_value = rows
        .iter()
        .filter(|property| property.attributes.area > 0.0)
        .min_by(|a, b| {
            a.price_per_sqft()
                .partial_cmp(&b.price_per_sqft())
                .unwrap_or(Ordering::Equal)
        })
        .map(|property| {
            format!(
                "{} (${:.0}/sq ft)",
                property.attributes.city,
                property.price_per_sqft()
            )
        });

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |id: String| {
            let removed = state.with_mut(|st| st.remove_saved(&id));
            if removed {
                persist_user_state(&state);
                push_toast(toasts.clone(), ToastKind::Info, "Property removed.");
            }
        }
    };

    rsx! {
        div { class: "page-stack",
            section { class: "kpi-grid",
                KpiCard {
                    title: "Saved Properties".to_string(),
                    value: count.to_string(),
                    description: Some("In this comparison list".to_string()),
                }
                KpiCard {
                    title: "Average Price".to_string(),
                    value: format_currency(average_price),
                    description: Some("Across saved properties".to_string()),
                }
                KpiCard {
                    title: "Best Value".to_string(),
                    value: best_value.unwrap_or_else(|| "n/a".to_string()),
                    description: Some("Lowest price per square foot".to_string()),
                }
            }
            section { class: "panel",
                h2 { class: "panel-title", "Property Comparison" }
                SavedPropertyTable {
                    rows,
                    empty_text: "Save a prediction to start comparing properties.",
                    on_remove,
                }
            }
        }
    }
}
