#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::valuation::ValuationError;

/// Supported cities. The base-rate table is an exhaustive match on this enum,
/// so a missing entry is a compile error rather than a runtime lookup failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Springfield,
    Riverton,
    Fairview,
    Franklin,
    Greenville,
    Bristol,
    Madison,
    Arlington,
}

impl City {
    pub const ALL: [City; 8] = [
        City::Springfield,
        City::Riverton,
        City::Fairview,
        City::Franklin,
        City::Greenville,
        City::Bristol,
        City::Madison,
        City::Arlington,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Springfield => "Springfield",
            City::Riverton => "Riverton",
            City::Fairview => "Fairview",
            City::Franklin => "Franklin",
            City::Greenville => "Greenville",
            City::Bristol => "Bristol",
            City::Madison => "Madison",
            City::Arlington => "Arlington",
        }
    }

    /// Base price per square foot. Single source of ground truth for the
    /// first step of the valuation model.
    pub fn base_rate(&self) -> f64 {
        match self {
            City::Springfield => 150.0,
            City::Riverton => 120.0,
            City::Fairview => 135.0,
            City::Franklin => 180.0,
            City::Greenville => 110.0,
            City::Bristol => 160.0,
            City::Madison => 210.0,
            City::Arlington => 240.0,
        }
    }

    /// Resolve a raw identifier against the closed city set.
    pub fn from_name(name: &str) -> Option<City> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|city| city.name().eq_ignore_ascii_case(trimmed))
    }
}

/// Fixed amenity vocabulary. Each flag carries a fixed absolute increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amenity {
    Parking,
    Garden,
    Balcony,
}

impl Amenity {
    pub const ALL: [Amenity; 3] = [Amenity::Parking, Amenity::Garden, Amenity::Balcony];

    pub fn key(&self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Garden => "garden",
            Amenity::Balcony => "balcony",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Parking => "Parking",
            Amenity::Garden => "Garden",
            Amenity::Balcony => "Balcony",
        }
    }

    /// Fixed price increment added when this flag is enabled.
    pub fn increment(&self) -> f64 {
        match self {
            Amenity::Parking => 5_000.0,
            Amenity::Garden => 7_500.0,
            Amenity::Balcony => 3_000.0,
        }
    }
}

/// Boolean flags over the fixed amenity vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AmenitySet {
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub garden: bool,
    #[serde(default)]
    pub balcony: bool,
}

impl AmenitySet {
    pub fn contains(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Parking => self.parking,
            Amenity::Garden => self.garden,
            Amenity::Balcony => self.balcony,
        }
    }

    pub fn set(&mut self, amenity: Amenity, enabled: bool) {
        match amenity {
            Amenity::Parking => self.parking = enabled,
            Amenity::Garden => self.garden = enabled,
            Amenity::Balcony => self.balcony = enabled,
        }
    }

    pub fn toggle(&mut self, amenity: Amenity) {
        let next = !self.contains(amenity);
        self.set(amenity, next);
    }

    /// Set a flag by its string key. Callers marshalling untyped input get
    /// `UnknownAmenity` for keys outside the vocabulary.
    pub fn set_by_key(&mut self, key: &str, enabled: bool) -> Result<(), ValuationError> {
        let amenity = Amenity::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.key() == key)
            .ok_or_else(|| ValuationError::UnknownAmenity(key.to_string()))?;
        self.set(amenity, enabled);
        Ok(())
    }

    pub fn enabled(&self) -> impl Iterator<Item = Amenity> + '_ {
        Amenity::ALL
            .iter()
            .copied()
            .filter(|amenity| self.contains(*amenity))
    }

    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self.enabled().map(|amenity| amenity.label()).collect();
        if labels.is_empty() {
            "None".to_string()
        } else {
            labels.join(", ")
        }
    }
}

/// The immutable attribute record submitted for valuation. Built fresh from
/// form input on every call; the engine never mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyAttributes {
    pub city: String,
    pub area: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub location_rating: f64,
    pub school_proximity: f64,
    pub market_proximity: f64,
    #[serde(default)]
    pub amenities: AmenitySet,
}

/// A computed result the user chose to keep, for the comparison list or the
/// wishlist. Ids are caller-generated and unique across sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedProperty {
    pub id: String,
    pub attributes: PropertyAttributes,
    pub price: f64,
    #[serde(default)]
    pub saved_at: String,
}

impl SavedProperty {
    pub fn price_per_sqft(&self) -> f64 {
        if self.attributes.area > 0.0 {
            self.price / self.attributes.area
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_lookup_is_case_insensitive_and_trims() {
        assert_eq!(City::from_name("springfield"), Some(City::Springfield));
        assert_eq!(City::from_name("  Madison "), Some(City::Madison));
        assert_eq!(City::from_name("Nonexistent City"), None);
        assert_eq!(City::from_name(""), None);
    }

    #[test]
    fn every_city_resolves_by_its_own_name() {
        for city in City::ALL {
            assert_eq!(City::from_name(city.name()), Some(city));
        }
    }

    #[test]
    fn set_by_key_rejects_unknown_vocabulary() {
        let mut amenities = AmenitySet::default();
        let err = amenities.set_by_key("pool", true).unwrap_err();
        assert_eq!(err, ValuationError::UnknownAmenity("pool".to_string()));
        assert_eq!(amenities, AmenitySet::default());
    }

    #[test]
    fn set_by_key_flips_known_flags() {
        let mut amenities = AmenitySet::default();
        amenities.set_by_key("parking", true).unwrap();
        amenities.set_by_key("balcony", true).unwrap();
        assert!(amenities.parking);
        assert!(amenities.balcony);
        assert!(!amenities.garden);
        assert_eq!(amenities.enabled().count(), 2);
    }

    #[test]
    fn summary_lists_enabled_flags_in_vocabulary_order() {
        let amenities = AmenitySet {
            parking: true,
            garden: false,
            balcony: true,
        };
        assert_eq!(amenities.summary(), "Parking, Balcony");
        assert_eq!(AmenitySet::default().summary(), "None");
    }
}
