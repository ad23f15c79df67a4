use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        estimate, similar_properties, Amenity, AmenitySet, AppState, City, PropertyAttributes,
        SavedProperty, SimilarProperty, ValuationResult,
    },
    ui::{
        components::{
            breakdown_table::BreakdownTable,
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        format_currency,
    },
    util::{record_id, saved_at_label},
};

const SIMILAR_LIMIT: usize = 4;

#[component]
pub fn PredictPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Form fields mirror the attribute record one to one; a fresh immutable
    // record is built from them on every submit.
    let mut city_input = use_signal(String::new);
    let mut area_input = use_signal(|| "1000".to_string());
    let mut bedrooms_input = use_signal(|| "2".to_string());
    let mut bathrooms_input = use_signal(|| "2".to_string());
    let mut rating_input = use_signal(|| "5".to_string());
    let mut school_input = use_signal(|| "2".to_string());
    let mut market_input = use_signal(|| "1.5".to_string());
    let mut amenities = use_signal(AmenitySet::default);

    let prediction = use_signal(|| None::<(PropertyAttributes, ValuationResult)>);

    let on_submit = {
        let toasts = toasts.clone();
        let mut prediction = prediction.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            if city_input().trim().is_empty() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Select a city to continue.",
                );
                return;
            }

            let attributes = match parse_attributes(
                city_input(),
                area_input(),
                bedrooms_input(),
                bathrooms_input(),
                rating_input(),
                school_input(),
                market_input(),
                amenities(),
            ) {
                Ok(attributes) => attributes,
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                    return;
                }
            };

            match estimate(&attributes) {
                Ok(result) => {
                    prediction.set(Some((attributes, result)));
                    push_toast(toasts.clone(), ToastKind::Success, "Price calculated.");
                }
                Err(err) => {
                    prediction.set(None);
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    let on_save = {
        let state = state.clone();
        let toasts = toasts.clone();
        let prediction = prediction.clone();
        move |_| save_current(state.clone(), toasts.clone(), prediction(), SaveTarget::Comparison)
    };

    let on_wishlist = {
        let state = state.clone();
        let toasts = toasts.clone();
        let prediction = prediction.clone();
        move |_| save_current(state.clone(), toasts.clone(), prediction(), SaveTarget::Wishlist)
    };

    let amenity_rows: Vec<(Amenity, bool)> = Amenity::ALL
        .iter()
        .map(|amenity| (*amenity, amenities().contains(*amenity)))
        .collect();

    let result_view = prediction().map(|(attributes, result)| {
        let per_sqft = if attributes.area > 0.0 {
            result.price / attributes.area
        } else {
            0.0
        };
        let similar = City::from_name(&attributes.city)
            .map(|city| similar_properties(city, result.price, SIMILAR_LIMIT))
            .unwrap_or_default();
        ResultView {
            price: result.price,
            per_sqft,
            base_rate: result.breakdown.base_rate,
            lines: result.breakdown.lines(),
            similar,
        }
    });
    let has_result = result_view.is_some();

    rsx! {
        div { class: "page-grid",
            div { class: "form-column",
                form {
                    class: "form-stack",
                    onsubmit: on_submit,
                    section { class: "panel",
                        h2 { class: "panel-title", "Location" }
                        label { class: "field-label", "City" }
                        select {
                            class: "input",
                            value: city_input(),
                            onchange: move |evt| city_input.set(evt.value()),
                            option { value: "", "Select a city" }
                            for city in City::ALL {
                                option { value: city.name(), "{city.name()}" }
                            }
                        }
                    }

                    section { class: "panel",
                        h2 { class: "panel-title", "Property Features" }
                        div { class: "field-grid",
                            FieldInput {
                                label: "Area (sq ft)",
                                value: area_input(),
                                oninput: move |value| area_input.set(value),
                            }
                            FieldInput {
                                label: "Bedrooms",
                                value: bedrooms_input(),
                                oninput: move |value| bedrooms_input.set(value),
                            }
                            FieldInput {
                                label: "Bathrooms",
                                value: bathrooms_input(),
                                oninput: move |value| bathrooms_input.set(value),
                            }
                        }
                    }

                    section { class: "panel",
                        h2 { class: "panel-title", "Advanced Features" }
                        div { class: "field-grid",
                            FieldInput {
                                label: "Location rating (1-10)",
                                value: rating_input(),
                                oninput: move |value| rating_input.set(value),
                            }
                            FieldInput {
                                label: "School proximity (km)",
                                value: school_input(),
                                oninput: move |value| school_input.set(value),
                            }
                            FieldInput {
                                label: "Market proximity (km)",
                                value: market_input(),
                                oninput: move |value| market_input.set(value),
                            }
                        }
                        div { class: "checkbox-row",
                            for (amenity, checked) in amenity_rows {
                                label { class: "checkbox-label",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onclick: move |_| {
                                            amenities.with_mut(|set| set.toggle(amenity));
                                        },
                                    }
                                    "{amenity.label()}"
                                }
                            }
                        }
                    }

                    button {
                        class: "btn-primary btn-block",
                        r#type: "submit",
                        "Predict Price"
                    }
                }
            }

            div { class: "result-column",
                if !has_result {
                    section { class: "panel result-placeholder",
                        h2 { class: "panel-title", "Prediction Result" }
                        p { class: "cell-muted",
                            "Fill in the form and press Predict Price to see the estimate and its breakdown."
                        }
                    }
                }
                if let Some(view) = result_view {
                    section { class: "panel",
                        h2 { class: "panel-title", "Prediction Result" }
                        div { class: "kpi-grid",
                            KpiCard {
                                title: "Estimated Price".to_string(),
                                value: format_currency(view.price),
                            }
                            KpiCard {
                                title: "Price per Sq Ft".to_string(),
                                value: format!("${:.0}", view.per_sqft),
                            }
                            KpiCard {
                                title: "City Base Rate".to_string(),
                                value: format!("${:.0}/sq ft", view.base_rate),
                            }
                        }
                        div { class: "button-row",
                            button { class: "btn-outline", onclick: on_save, "Save for Comparison" }
                            button { class: "btn-outline", onclick: on_wishlist, "Add to Wishlist" }
                        }
                    }
                    section { class: "panel",
                        h2 { class: "panel-title", "Why This Price" }
                        BreakdownTable { lines: view.lines, total: view.price }
                    }
                    section { class: "panel",
                        h2 { class: "panel-title", "Similar Properties" }
                        if view.similar.is_empty() {
                            p { class: "cell-muted", "No comparable homes near this price." }
                        }
                        for entry in view.similar {
                            SimilarRow { entry }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ResultView {
    price: f64,
    per_sqft: f64,
    base_rate: f64,
    lines: Vec<crate::domain::BreakdownLine>,
    similar: Vec<SimilarProperty>,
}

#[component]
fn SimilarRow(entry: SimilarProperty) -> Element {
    let summary = format!(
        "{:.0} sq ft · {} bd · {} ba · {}",
        entry.attributes.area,
        entry.attributes.bedrooms,
        entry.attributes.bathrooms,
        entry.attributes.amenities.summary()
    );
    rsx! {
        div { class: "similar-row",
            div {
                p { class: "cell-strong", "{entry.attributes.city}" }
                p { class: "cell-muted", "{summary}" }
            }
            p { class: "similar-price", {format_currency(entry.price)} }
        }
    }
}

#[component]
fn FieldInput(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "input",
                inputmode: "decimal",
                value: value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

enum SaveTarget {
    Comparison,
    Wishlist,
}

fn save_current(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    prediction: Option<(PropertyAttributes, ValuationResult)>,
    target: SaveTarget,
) {
    let Some((attributes, result)) = prediction else {
        push_toast(toasts, ToastKind::Warning, "Predict a price first.");
        return;
    };

    let property = SavedProperty {
        id: record_id(),
        attributes,
        price: result.price,
        saved_at: saved_at_label(),
    };

    state.with_mut(|st| match target {
        SaveTarget::Comparison => st.add_saved(property),
        SaveTarget::Wishlist => st.add_wishlisted(property),
    });
    persist_user_state(&state);

    let message = match target {
        SaveTarget::Comparison => "Property saved for comparison.",
        SaveTarget::Wishlist => "Property added to wishlist.",
    };
    push_toast(toasts, ToastKind::Success, message);
}

#[allow(clippy::too_many_arguments)]
fn parse_attributes(
    city: String,
    area: String,
    bedrooms: String,
    bathrooms: String,
    rating: String,
    school: String,
    market: String,
    amenities: AmenitySet,
) -> Result<PropertyAttributes, String> {
    Ok(PropertyAttributes {
        city: city.trim().to_string(),
        area: parse_field::<f64>(&area, "area")?,
        bedrooms: parse_field::<i32>(&bedrooms, "bedrooms")?,
        bathrooms: parse_field::<i32>(&bathrooms, "bathrooms")?,
        location_rating: parse_field::<f64>(&rating, "location rating")?,
        school_proximity: parse_field::<f64>(&school, "school proximity")?,
        market_proximity: parse_field::<f64>(&market, "market proximity")?,
        amenities,
    })
}

fn parse_field<T: std::str::FromStr>(input: &str, field: &str) -> Result<T, String> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| format!("Enter a valid number for {field}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_attributes_builds_a_record_from_form_strings() {
        let attributes = parse_attributes(
            " Springfield ".to_string(),
            "1000".to_string(),
            "2".to_string(),
            "2".to_string(),
            "5".to_string(),
            "2".to_string(),
            "1.5".to_string(),
            AmenitySet::default(),
        )
        .unwrap();
        assert_eq!(attributes.city, "Springfield");
        assert_eq!(attributes.area, 1_000.0);
        assert_eq!(attributes.market_proximity, 1.5);
    }

    #[test]
    fn parse_attributes_names_the_bad_field() {
        let err = parse_attributes(
            "Springfield".to_string(),
            "big".to_string(),
            "2".to_string(),
            "2".to_string(),
            "5".to_string(),
            "2".to_string(),
            "1.5".to_string(),
            AmenitySet::default(),
        )
        .unwrap_err();
        assert!(err.contains("area"));
    }

    #[test]
    fn negative_room_strings_still_parse_so_the_engine_can_reject_them() {
        let attributes = parse_attributes(
            "Springfield".to_string(),
            "1000".to_string(),
            "-1".to_string(),
            "2".to_string(),
            "5".to_string(),
            "2".to_string(),
            "1.5".to_string(),
            AmenitySet::default(),
        )
        .unwrap();
        assert!(estimate(&attributes).is_err());
    }
}
