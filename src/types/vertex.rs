//! Unified view over the two vertex kinds.

use super::{Lexeme, MeaningNode};

/// A borrowed vertex of the lexical graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex<'a> {
    /// A stored word-form.
    Lexeme(&'a Lexeme),
    /// A node of the meaning graph.
    Meaning(&'a MeaningNode),
}

impl<'a> Vertex<'a> {
    /// The vertex ID, whichever kind it is.
    pub fn id(&self) -> u64 {
        match self {
            Self::Lexeme(l) => l.id,
            Self::Meaning(m) => m.id,
        }
    }

    /// The lexeme, if this vertex is one.
    pub fn as_lexeme(&self) -> Option<&'a Lexeme> {
        match *self {
            Self::Lexeme(l) => Some(l),
            Self::Meaning(_) => None,
        }
    }

    /// The meaning node, if this vertex is one.
    pub fn as_meaning(&self) -> Option<&'a MeaningNode> {
        match *self {
            Self::Meaning(m) => Some(m),
            Self::Lexeme(_) => None,
        }
    }

    /// Short kind label for display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lexeme(_) => "lexeme",
            Self::Meaning(_) => "meaning",
        }
    }
}
