//! The valuation engine: a pure additive model over a validated attribute
//! record. All tunable constants live here so every breakdown line can be
//! traced back to one of them.

use thiserror::Error;

use super::entities::{Amenity, City, PropertyAttributes};

/// Per-bedroom increment, city-independent.
pub const BEDROOM_INCREMENT: f64 = 12_000.0;
/// Per-bathroom increment, weighted below bedrooms.
pub const BATHROOM_INCREMENT: f64 = 8_000.0;

/// Rating at which location quality neither raises nor lowers the price.
pub const RATING_NEUTRAL: f64 = 5.0;
/// Share of the running subtotal added per rating point away from neutral.
pub const RATING_UPLIFT_PER_POINT: f64 = 0.04;
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

/// Proximity uplifts are negative-linear in distance and clamp to zero at
/// the cutoff, so living far from a school is never a penalty.
pub const SCHOOL_PROXIMITY_RATE: f64 = 5_000.0;
pub const SCHOOL_PROXIMITY_CUTOFF_KM: f64 = 10.0;
pub const MARKET_PROXIMITY_RATE: f64 = 4_000.0;
pub const MARKET_PROXIMITY_CUTOFF_KM: f64 = 8.0;
/// Largest distance accepted as structurally valid input.
pub const PROXIMITY_MAX_KM: f64 = 100.0;

/// Square footage beyond the soft cap earns a tapered share of the base rate.
pub const SIZE_SOFT_CAP_SQFT: f64 = 3_500.0;
pub const SIZE_TAPER_FACTOR: f64 = 0.6;

/// Caller-input failures. Every variant names the offending field so the UI
/// can render an actionable message; the engine has no internal fault class.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValuationError {
    #[error("\"{0}\" is not a supported city")]
    InvalidLocation(String),
    #[error("area must be a positive number of square feet, got {0}")]
    InvalidArea(f64),
    #[error("{field} cannot be negative, got {value}")]
    InvalidRoomCount { field: &'static str, value: i32 },
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("\"{0}\" is not a known amenity")]
    UnknownAmenity(String),
}

/// One labelled additive term of the final price.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: f64,
}

/// Per-factor contributions. Their sum, clamped at zero, is the final price.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    /// Base price per square foot for the resolved city.
    pub base_rate: f64,
    pub size: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    /// Negative below the neutral rating.
    pub location: f64,
    pub school_proximity: f64,
    pub market_proximity: f64,
    pub amenities: Vec<(Amenity, f64)>,
}

impl Breakdown {
    pub fn amenity_total(&self) -> f64 {
        self.amenities.iter().map(|(_, amount)| amount).sum()
    }

    fn total(&self) -> f64 {
        self.size
            + self.bedrooms
            + self.bathrooms
            + self.location
            + self.school_proximity
            + self.market_proximity
            + self.amenity_total()
    }

    /// Labelled lines for display, in model order.
    pub fn lines(&self) -> Vec<BreakdownLine> {
        let mut lines = vec![
            BreakdownLine {
                label: format!("Size at ${:.0}/sq ft", self.base_rate),
                amount: self.size,
            },
            BreakdownLine {
                label: "Bedrooms".to_string(),
                amount: self.bedrooms,
            },
            BreakdownLine {
                label: "Bathrooms".to_string(),
                amount: self.bathrooms,
            },
            BreakdownLine {
                label: "Location rating".to_string(),
                amount: self.location,
            },
            BreakdownLine {
                label: "School proximity".to_string(),
                amount: self.school_proximity,
            },
            BreakdownLine {
                label: "Market proximity".to_string(),
                amount: self.market_proximity,
            },
        ];
        for (amenity, amount) in &self.amenities {
            lines.push(BreakdownLine {
                label: amenity.label().to_string(),
                amount: *amount,
            });
        }
        lines
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValuationResult {
    pub price: f64,
    pub breakdown: Breakdown,
}

/// Estimate the market price for an attribute record.
///
/// Pure and deterministic: identical attributes always produce an identical
/// result, which is what makes recompute and comparison meaningful. The
/// record is only read, never mutated, and the work is constant: the only
/// loop runs over the fixed amenity vocabulary.
pub fn estimate(attributes: &PropertyAttributes) -> Result<ValuationResult, ValuationError> {
    let city = validate(attributes)?;

    let base_rate = city.base_rate();
    let size = size_contribution(base_rate, attributes.area);
    let bedrooms = attributes.bedrooms as f64 * BEDROOM_INCREMENT;
    let bathrooms = attributes.bathrooms as f64 * BATHROOM_INCREMENT;
    let location = (size + bedrooms + bathrooms)
        * (attributes.location_rating - RATING_NEUTRAL)
        * RATING_UPLIFT_PER_POINT;
    let school_proximity = proximity_uplift(
        attributes.school_proximity,
        SCHOOL_PROXIMITY_RATE,
        SCHOOL_PROXIMITY_CUTOFF_KM,
    );
    let market_proximity = proximity_uplift(
        attributes.market_proximity,
        MARKET_PROXIMITY_RATE,
        MARKET_PROXIMITY_CUTOFF_KM,
    );
    let amenities = attributes
        .amenities
        .enabled()
        .map(|amenity| (amenity, amenity.increment()))
        .collect();

    let breakdown = Breakdown {
        base_rate,
        size,
        bedrooms,
        bathrooms,
        location,
        school_proximity,
        market_proximity,
        amenities,
    };
    let price = breakdown.total().max(0.0);

    Ok(ValuationResult { price, breakdown })
}

/// Structural validation only. Plausible out-of-range values (a 50 km school
/// run, a 19,000 sq ft lodge) pass and are handled by the model's clamps.
fn validate(attributes: &PropertyAttributes) -> Result<City, ValuationError> {
    let city = City::from_name(&attributes.city)
        .ok_or_else(|| ValuationError::InvalidLocation(attributes.city.clone()))?;

    if !attributes.area.is_finite() || attributes.area <= 0.0 {
        return Err(ValuationError::InvalidArea(attributes.area));
    }
    if attributes.bedrooms < 0 {
        return Err(ValuationError::InvalidRoomCount {
            field: "bedrooms",
            value: attributes.bedrooms,
        });
    }
    if attributes.bathrooms < 0 {
        return Err(ValuationError::InvalidRoomCount {
            field: "bathrooms",
            value: attributes.bathrooms,
        });
    }
    check_range(
        "location rating",
        attributes.location_rating,
        RATING_MIN,
        RATING_MAX,
    )?;
    check_range(
        "school proximity",
        attributes.school_proximity,
        0.0,
        PROXIMITY_MAX_KM,
    )?;
    check_range(
        "market proximity",
        attributes.market_proximity,
        0.0,
        PROXIMITY_MAX_KM,
    )?;

    Ok(city)
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValuationError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ValuationError::InvalidRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn size_contribution(base_rate: f64, area: f64) -> f64 {
    if area <= SIZE_SOFT_CAP_SQFT {
        base_rate * area
    } else {
        base_rate * SIZE_SOFT_CAP_SQFT + base_rate * SIZE_TAPER_FACTOR * (area - SIZE_SOFT_CAP_SQFT)
    }
}

fn proximity_uplift(distance: f64, rate: f64, cutoff: f64) -> f64 {
    rate * (cutoff - distance).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AmenitySet;

    fn springfield_reference() -> PropertyAttributes {
        PropertyAttributes {
            city: "Springfield".to_string(),
            area: 1_000.0,
            bedrooms: 2,
            bathrooms: 2,
            location_rating: 5.0,
            school_proximity: 2.0,
            market_proximity: 1.5,
            amenities: AmenitySet::default(),
        }
    }

    #[test]
    fn reference_scenario_matches_documented_constants() {
        // 150_000 size + 24_000 beds + 16_000 baths + 0 rating
        // + 40_000 school + 26_000 market = 256_000.
        let result = estimate(&springfield_reference()).unwrap();
        assert_eq!(result.price, 256_000.0);
        assert_eq!(result.breakdown.size, 150_000.0);
        assert_eq!(result.breakdown.location, 0.0);
    }

    #[test]
    fn estimate_is_pure() {
        let attributes = PropertyAttributes {
            city: "Madison".to_string(),
            area: 2_340.5,
            bedrooms: 4,
            bathrooms: 3,
            location_rating: 7.5,
            school_proximity: 0.8,
            market_proximity: 4.2,
            amenities: AmenitySet {
                parking: true,
                garden: true,
                balcony: false,
            },
        };
        let first = estimate(&attributes).unwrap();
        let second = estimate(&attributes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn estimate_does_not_mutate_input() {
        let attributes = springfield_reference();
        let copy = attributes.clone();
        estimate(&attributes).unwrap();
        assert_eq!(attributes, copy);
    }

    #[test]
    fn enabling_parking_adds_exactly_its_increment() {
        let base = estimate(&springfield_reference()).unwrap().price;
        let mut attributes = springfield_reference();
        attributes.amenities.parking = true;
        let with_parking = estimate(&attributes).unwrap().price;
        assert_eq!(with_parking - base, Amenity::Parking.increment());
        assert_eq!(with_parking, 261_000.0);
    }

    #[test]
    fn each_amenity_adds_exactly_its_own_increment() {
        let base = estimate(&springfield_reference()).unwrap().price;
        for amenity in Amenity::ALL {
            let mut attributes = springfield_reference();
            attributes.amenities.set(amenity, true);
            let price = estimate(&attributes).unwrap().price;
            assert_eq!(price - base, amenity.increment());
        }
    }

    #[test]
    fn extra_bedroom_adds_exactly_one_increment() {
        let mut attributes = springfield_reference();
        attributes.bedrooms = 3;
        let result = estimate(&attributes).unwrap();
        assert_eq!(result.price, 256_000.0 + BEDROOM_INCREMENT);
    }

    #[test]
    fn price_is_monotone_in_area() {
        let mut previous = 0.0;
        for area in [120.0, 800.0, 2_000.0, 3_500.0, 3_600.0, 9_000.0, 20_000.0] {
            let mut attributes = springfield_reference();
            attributes.area = area;
            let price = estimate(&attributes).unwrap().price;
            assert!(
                price >= previous,
                "price dropped from {previous} to {price} at area {area}"
            );
            previous = price;
        }
    }

    #[test]
    fn price_is_monotone_in_location_rating() {
        let mut previous = 0.0;
        for rating in 1..=10 {
            let mut attributes = springfield_reference();
            attributes.location_rating = rating as f64;
            let price = estimate(&attributes).unwrap().price;
            assert!(price >= previous);
            previous = price;
        }
    }

    #[test]
    fn price_never_increases_with_distance() {
        let mut previous = f64::INFINITY;
        for distance in [0.0, 0.5, 2.0, 5.0, 10.0, 25.0, 100.0] {
            let mut attributes = springfield_reference();
            attributes.school_proximity = distance;
            let price = estimate(&attributes).unwrap().price;
            assert!(price <= previous);
            previous = price;
        }
    }

    #[test]
    fn distance_beyond_cutoff_has_zero_marginal_effect() {
        let mut at_cutoff = springfield_reference();
        at_cutoff.school_proximity = SCHOOL_PROXIMITY_CUTOFF_KM;
        at_cutoff.market_proximity = MARKET_PROXIMITY_CUTOFF_KM;
        let mut far_beyond = at_cutoff.clone();
        far_beyond.school_proximity = 60.0;
        far_beyond.market_proximity = 45.0;

        let near = estimate(&at_cutoff).unwrap();
        let far = estimate(&far_beyond).unwrap();
        assert_eq!(near.price, far.price);
        assert_eq!(far.breakdown.school_proximity, 0.0);
        assert_eq!(far.breakdown.market_proximity, 0.0);
    }

    #[test]
    fn price_is_never_negative_for_valid_input() {
        // Worst plausible case: tiny area, lowest rating, everything far away.
        let attributes = PropertyAttributes {
            city: "Greenville".to_string(),
            area: 1.0,
            bedrooms: 0,
            bathrooms: 0,
            location_rating: 1.0,
            school_proximity: 100.0,
            market_proximity: 100.0,
            amenities: AmenitySet::default(),
        };
        let result = estimate(&attributes).unwrap();
        assert!(result.price >= 0.0);
    }

    #[test]
    fn size_taper_applies_only_above_the_soft_cap() {
        let mut at_cap = springfield_reference();
        at_cap.area = SIZE_SOFT_CAP_SQFT;
        let mut above_cap = springfield_reference();
        above_cap.area = SIZE_SOFT_CAP_SQFT + 100.0;

        let cap_size = estimate(&at_cap).unwrap().breakdown.size;
        let above_size = estimate(&above_cap).unwrap().breakdown.size;
        assert_eq!(cap_size, 150.0 * SIZE_SOFT_CAP_SQFT);
        assert_eq!(above_size - cap_size, 150.0 * SIZE_TAPER_FACTOR * 100.0);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let mut attributes = springfield_reference();
        attributes.city = "Nonexistent City".to_string();
        assert_eq!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidLocation("Nonexistent City".to_string())
        );
    }

    #[test]
    fn empty_city_is_rejected() {
        let mut attributes = springfield_reference();
        attributes.city = String::new();
        assert!(matches!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidLocation(_)
        ));
    }

    #[test]
    fn non_positive_area_is_rejected() {
        for area in [0.0, -350.0, f64::NAN, f64::INFINITY] {
            let mut attributes = springfield_reference();
            attributes.area = area;
            assert!(matches!(
                estimate(&attributes).unwrap_err(),
                ValuationError::InvalidArea(_)
            ));
        }
    }

    #[test]
    fn negative_room_counts_are_rejected() {
        let mut attributes = springfield_reference();
        attributes.bedrooms = -1;
        assert_eq!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRoomCount {
                field: "bedrooms",
                value: -1
            }
        );

        let mut attributes = springfield_reference();
        attributes.bathrooms = -2;
        assert_eq!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRoomCount {
                field: "bathrooms",
                value: -2
            }
        );
    }

    #[test]
    fn out_of_bounds_rating_and_distances_are_rejected() {
        let mut attributes = springfield_reference();
        attributes.location_rating = 0.5;
        assert!(matches!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRange {
                field: "location rating",
                ..
            }
        ));

        let mut attributes = springfield_reference();
        attributes.location_rating = f64::NAN;
        assert!(matches!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRange { .. }
        ));

        let mut attributes = springfield_reference();
        attributes.school_proximity = -1.0;
        assert!(matches!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRange {
                field: "school proximity",
                ..
            }
        ));

        let mut attributes = springfield_reference();
        attributes.market_proximity = 250.0;
        assert!(matches!(
            estimate(&attributes).unwrap_err(),
            ValuationError::InvalidRange {
                field: "market proximity",
                ..
            }
        ));
    }

    #[test]
    fn breakdown_lines_cover_every_factor() {
        let mut attributes = springfield_reference();
        attributes.amenities.garden = true;
        let result = estimate(&attributes).unwrap();
        let lines = result.breakdown.lines();
        assert_eq!(lines.len(), 7);
        let total: f64 = lines.iter().map(|line| line.amount).sum();
        assert!((total - result.price).abs() < 1e-9);
    }
}
