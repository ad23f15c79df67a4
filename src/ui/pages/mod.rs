pub mod compare;
pub mod history;
pub mod predict;
pub mod wishlist;

pub use compare::ComparePage;
pub use history::HistoryPage;
pub use predict::PredictPage;
pub use wishlist::WishlistPage;
