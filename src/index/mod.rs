//! Index structures for fast lookup. Each index is rebuilt from the snapshot's vertices.

pub mod form_index;
pub mod form_tree;
pub mod type_index;

pub use form_index::FormIndex;
pub use form_tree::FormTree;
pub use type_index::MeaningTypeIndex;
