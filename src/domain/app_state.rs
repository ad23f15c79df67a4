//! Session state for the surrounding app: the comparison list and the
//! wishlist. The valuation engine never sees or mutates any of this.

use serde::{Deserialize, Serialize};

use super::entities::SavedProperty;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub saved_properties: Vec<SavedProperty>,
    pub wishlist: Vec<SavedProperty>,
}

impl AppState {
    pub fn add_saved(&mut self, property: SavedProperty) {
        self.saved_properties.push(property);
    }

    pub fn remove_saved(&mut self, id: &str) -> bool {
        let before = self.saved_properties.len();
        self.saved_properties.retain(|property| property.id != id);
        self.saved_properties.len() != before
    }

    pub fn add_wishlisted(&mut self, property: SavedProperty) {
        self.wishlist.push(property);
    }

    pub fn remove_wishlisted(&mut self, id: &str) -> bool {
        let before = self.wishlist.len();
        self.wishlist.retain(|property| property.id != id);
        self.wishlist.len() != before
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.saved_properties = persisted.saved_properties;
        self.wishlist = persisted.wishlist;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            saved_properties: self.saved_properties.clone(),
            wishlist: self.wishlist.clone(),
        }
    }
}

/// Snapshot of the user lists written to the config dir between sessions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub saved_properties: Vec<SavedProperty>,
    #[serde(default)]
    pub wishlist: Vec<SavedProperty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AmenitySet, PropertyAttributes};

    fn sample(id: &str) -> SavedProperty {
        SavedProperty {
            id: id.to_string(),
            attributes: PropertyAttributes {
                city: "Springfield".to_string(),
                area: 1_000.0,
                bedrooms: 2,
                bathrooms: 2,
                location_rating: 5.0,
                school_proximity: 2.0,
                market_proximity: 1.5,
                amenities: AmenitySet::default(),
            },
            price: 256_000.0,
            saved_at: "2026-08-06".to_string(),
        }
    }

    #[test]
    fn saved_list_round_trips_add_and_remove() {
        let mut state = AppState::default();
        state.add_saved(sample("a"));
        state.add_saved(sample("b"));
        assert_eq!(state.saved_properties.len(), 2);

        assert!(state.remove_saved("a"));
        assert_eq!(state.saved_properties.len(), 1);
        assert_eq!(state.saved_properties[0].id, "b");

        assert!(!state.remove_saved("missing"));
        assert_eq!(state.saved_properties.len(), 1);
    }

    #[test]
    fn wishlist_is_independent_of_the_comparison_list() {
        let mut state = AppState::default();
        state.add_saved(sample("a"));
        state.add_wishlisted(sample("w"));

        assert!(state.remove_wishlisted("w"));
        assert!(state.wishlist.is_empty());
        assert_eq!(state.saved_properties.len(), 1);
    }

    #[test]
    fn persisted_snapshot_round_trips_through_json() {
        let mut state = AppState::default();
        state.add_saved(sample("a"));
        state.add_wishlisted(sample("w"));

        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::default();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.saved_properties, state.saved_properties);
        assert_eq!(fresh.wishlist, state.wishlist);
    }
}
