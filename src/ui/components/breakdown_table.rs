use dioxus::prelude::*;

use crate::domain::BreakdownLine;
use crate::ui::format_currency;

/// Itemized per-factor contributions behind an estimate, ending with the
/// clamped total the user actually sees.
#[component]
pub fn BreakdownTable(lines: Vec<BreakdownLine>, total: f64) -> Element {
    let rendered: Vec<(String, String, &'static str)> = lines
        .into_iter()
        .map(|line| {
            let class = if line.amount < 0.0 {
                "numeric negative"
            } else {
                "numeric"
            };
            (line.label, format_currency(line.amount), class)
        })
        .collect();

    rsx! {
        div {
            class: "table-panel",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Factor" }
                        th { class: "numeric", "Contribution" }
                    }
                }
                tbody {
                    for (label, amount, class) in rendered {
                        tr {
                            td { "{label}" }
                            td { class: "{class}", "{amount}" }
                        }
                    }
                    tr {
                        class: "total-row",
                        td { "Estimated price" }
                        td { class: "numeric", {format_currency(total)} }
                    }
                }
            }
        }
    }
}
