//! Similar-property discovery: price a fixed candidate grid through the
//! engine and rank by distance to the target price. Pure, and bounded by the
//! grid size regardless of input.

use std::cmp::Ordering;

use super::entities::{AmenitySet, City, PropertyAttributes};
use super::valuation;

/// Candidates farther than this fraction of the target price are discarded.
const PRICE_BAND: f64 = 0.35;

const AREA_STEPS: [f64; 6] = [850.0, 1_100.0, 1_400.0, 1_800.0, 2_300.0, 2_900.0];
const BEDROOM_STEPS: [i32; 3] = [2, 3, 4];

const SCHOOL_STEPS: [f64; 4] = [1.0, 2.5, 4.0, 6.0];
const MARKET_STEPS: [f64; 3] = [0.5, 1.5, 3.0];

#[derive(Clone, Debug, PartialEq)]
pub struct SimilarProperty {
    pub attributes: PropertyAttributes,
    pub price: f64,
}

impl SimilarProperty {
    pub fn distance(&self, target: f64) -> f64 {
        (self.price - target).abs()
    }
}

/// Up to `limit` candidate homes in `city` priced closest to `target_price`.
pub fn similar_properties(city: City, target_price: f64, limit: usize) -> Vec<SimilarProperty> {
    if !target_price.is_finite() || target_price <= 0.0 {
        return Vec::new();
    }

    let mut candidates: Vec<SimilarProperty> = Vec::new();
    for (area_index, area) in AREA_STEPS.iter().enumerate() {
        for (bedroom_index, bedrooms) in BEDROOM_STEPS.iter().enumerate() {
            let attributes = candidate(city, *area, *bedrooms, area_index + bedroom_index);
            if let Ok(result) = valuation::estimate(&attributes) {
                candidates.push(SimilarProperty {
                    attributes,
                    price: result.price,
                });
            }
        }
    }

    candidates.retain(|entry| entry.distance(target_price) <= target_price * PRICE_BAND);
    candidates.sort_by(|a, b| {
        a.distance(target_price)
            .partial_cmp(&b.distance(target_price))
            .unwrap_or(Ordering::Equal)
            .then(
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(Ordering::Equal),
            )
    });
    candidates.truncate(limit);
    candidates
}

/// Deterministic variation: the grid index drives rating, proximities and
/// amenities so neighbouring candidates do not collapse into clones.
fn candidate(city: City, area: f64, bedrooms: i32, variant: usize) -> PropertyAttributes {
    PropertyAttributes {
        city: city.name().to_string(),
        area,
        bedrooms,
        bathrooms: (bedrooms - 1).max(1),
        location_rating: 4.0 + (variant % 5) as f64,
        school_proximity: SCHOOL_STEPS[variant % SCHOOL_STEPS.len()],
        market_proximity: MARKET_STEPS[variant % MARKET_STEPS.len()],
        amenities: AmenitySet {
            parking: variant % 2 == 0,
            garden: variant % 3 == 0,
            balcony: variant % 4 == 0,
        },
    }
}
