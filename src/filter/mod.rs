// Filter module: price/category filter, tag relevance and locality ordering.

pub mod criteria;
pub mod engine;
pub mod locality;
pub mod relevance;
pub mod tables;

pub use criteria::filter_by_price_and_tag;
pub use engine::{FilterEngine, ListingFilter};
pub use locality::sort_by_locality;
pub use relevance::{is_relevant_match, is_relevant_match_with};
pub use tables::MatchTables;
