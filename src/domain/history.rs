//! Synthetic per-city price history. Anchored on the engine's estimate of a
//! fixed reference home, so the series is deterministic and redraws
//! identically for the same city.

use super::entities::{AmenitySet, City, PropertyAttributes};
use super::valuation;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seasonal index layered on top of the city trend. Spring and summer run
/// hot, the turn of the year runs cold.
const SEASONAL_INDEX: [f64; 12] = [
    0.970, 0.968, 0.975, 0.990, 1.005, 1.020, 1.030, 1.025, 1.012, 1.000, 0.985, 0.978,
];

/// One point of a city's synthetic price series.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryPoint {
    pub month: &'static str,
    pub price: f64,
}

/// Twelve-month series for `city`: reference price x seasonal index x a
/// linear per-city drift.
pub fn price_history(city: City) -> Vec<HistoryPoint> {
    let anchor = reference_price(city);
    let drift = annual_drift(city);

    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let trend = 1.0 + drift * index as f64 / 12.0;
            HistoryPoint {
                month,
                price: anchor * SEASONAL_INDEX[index] * trend,
            }
        })
        .collect()
}

/// Engine estimate of the fixed reference home that anchors a city's series.
pub fn reference_price(city: City) -> f64 {
    valuation::estimate(&reference_home(city))
        .map(|result| result.price)
        .unwrap_or(0.0)
}

fn reference_home(city: City) -> PropertyAttributes {
    PropertyAttributes {
        city: city.name().to_string(),
        area: 1_500.0,
        bedrooms: 3,
        bathrooms: 2,
        location_rating: 6.0,
        school_proximity: 3.0,
        market_proximity: 2.0,
        amenities: AmenitySet {
            parking: true,
            garden: false,
            balcony: false,
        },
    }
}

/// Yearly appreciation assumed for the trend component.
fn annual_drift(city: City) -> f64 {
    match city {
        City::Springfield => 0.042,
        City::Riverton => 0.031,
        City::Fairview => 0.036,
        City::Franklin => 0.048,
        City::Greenville => 0.027,
        City::Bristol => 0.044,
        City::Madison => 0.055,
        City::Arlington => 0.061,
    }
}

pub fn series_low(points: &[HistoryPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points
        .iter()
        .map(|point| point.price)
        .fold(f64::INFINITY, f64::min)
}

pub fn series_high(points: &[HistoryPoint]) -> f64 {
    points
        .iter()
        .map(|point| point.price)
        .fold(0.0, f64::max)
}

/// Percent change from the first to the last point of the series.
pub fn change_percent(points: &[HistoryPoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if first.price > 0.0 => {
            (last.price - first.price) / first.price * 100.0
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_twelve_positive_points() {
        for city in City::ALL {
            let points = price_history(city);
            assert_eq!(points.len(), 12);
            assert!(points.iter().all(|point| point.price > 0.0));
        }
    }

    #[test]
    fn series_is_deterministic() {
        assert_eq!(
            price_history(City::Springfield),
            price_history(City::Springfield)
        );
    }

    #[test]
    fn series_depends_on_the_city() {
        let springfield = price_history(City::Springfield);
        let arlington = price_history(City::Arlington);
        assert_ne!(springfield[0].price, arlington[0].price);
    }

    #[test]
    fn anchor_reflects_the_city_base_rate() {
        assert!(reference_price(City::Arlington) > reference_price(City::Greenville));
    }

    #[test]
    fn summary_helpers_bracket_the_series() {
        let points = price_history(City::Bristol);
        let low = series_low(&points);
        let high = series_high(&points);
        assert!(low <= high);
        assert!(points
            .iter()
            .all(|point| point.price >= low && point.price <= high));
        assert!(change_percent(&points) > 0.0);
    }

    #[test]
    fn summary_helpers_tolerate_empty_series() {
        assert_eq!(change_percent(&[]), 0.0);
        assert_eq!(series_high(&[]), 0.0);
    }
}
