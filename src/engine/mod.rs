//! Query operations — edit-distance and wildcard matchers plus meaning resolution.

pub mod edit_distance;
pub mod pattern;
pub mod query;

pub use edit_distance::{levenshtein, within_distance};
pub use pattern::WildcardPattern;
pub use query::{MeaningMatch, QueryEngine, RootPath};
