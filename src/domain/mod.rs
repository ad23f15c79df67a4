//! Domain logic for property valuation lives here.

pub mod app_state;
pub mod entities;
pub mod history;
pub mod similarity;
pub mod valuation;

pub use app_state::{AppState, PersistedState};
pub use entities::{Amenity, AmenitySet, City, PropertyAttributes, SavedProperty};
pub use history::{price_history, HistoryPoint};
pub use similarity::{similar_properties, SimilarProperty};
#[allow(unused_imports)]
pub use valuation::{estimate, Breakdown, BreakdownLine, ValuationError, ValuationResult};
