use dioxus::prelude::*;

use crate::domain::SavedProperty;
use crate::ui::format_currency;

/// Table over saved records, shared by the comparison and wishlist pages.
#[component]
pub fn SavedPropertyTable(
    rows: Vec<SavedProperty>,
    empty_text: &'static str,
    on_remove: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "table-panel",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "City" }
                        th { class: "numeric", "Sq Ft" }
                        th { class: "numeric", "Beds" }
                        th { class: "numeric", "Baths" }
                        th { class: "numeric", "Rating" }
                        th { "Amenities" }
                        th { class: "numeric", "Price" }
                        th { "Saved" }
                        th {}
                    }
                }
                tbody {
                    for row in rows {
                        SavedPropertyRow { row, on_remove: on_remove.clone() }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "empty-cell",
                                colspan: "9",
                                "{empty_text}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedPropertyRow(row: SavedProperty, on_remove: EventHandler<String>) -> Element {
    let remove_id = row.id.clone();
    rsx! {
        tr {
            td { class: "cell-strong", "{row.attributes.city}" }
            td { class: "numeric", {format!("{:.0}", row.attributes.area)} }
            td { class: "numeric", "{row.attributes.bedrooms}" }
            td { class: "numeric", "{row.attributes.bathrooms}" }
            td { class: "numeric", {format!("{:.1}", row.attributes.location_rating)} }
            td { class: "cell-muted", {row.attributes.amenities.summary()} }
            td { class: "numeric cell-strong", {format_currency(row.price)} }
            td { class: "cell-muted", "{row.saved_at}" }
            td {
                class: "cell-actions",
                button {
                    class: "btn-danger",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Remove"
                }
            }
        }
    }
}
