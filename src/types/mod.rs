//! All data types for the Lexigraph library.

pub mod edge;
pub mod error;
pub mod lexeme;
pub mod meaning;
pub mod vertex;

pub use edge::{Edge, Relation};
pub use error::{ErrorKind, LexError, LexResult};
pub use lexeme::Lexeme;
pub use meaning::{MeaningNode, MeaningNodeBuilder, MeaningType};
pub use vertex::Vertex;

/// Marker value carried by the root node of a meaning tree.
pub const ROOT_SENTINEL: i64 = 0;

/// Number of inbound `MeaningRoot` hops between a lexeme and its meaning root.
pub const ROOT_HOPS: u32 = 3;

/// Maximum outbound `MeaningGraph` depth explored from a meaning root.
pub const MAX_MEANING_DEPTH: u32 = 10;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
