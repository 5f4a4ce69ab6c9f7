use crate::ast::Number;

/// Literal injected by a value assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Number),
    String(String),
}

/// One step of a phrase.
///
/// Every segment remembers the character offset of the token that
/// introduced it so that later stages can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Bare identifier adding one nesting level to the output
    ///
    /// # Example
    /// ```text
    /// where.in.$    // `where` and `in`
    /// ```
    PathSegment { name: String, position: usize },

    /// Reads a field off the current value
    ///
    /// # Example
    /// ```text
    /// $>#id
    /// ```
    PropertyAccess { name: String, position: usize },

    /// The whole input value
    ///
    /// # Example
    /// ```text
    /// $
    /// ```
    InputReference { position: usize },

    /// Starts a per-element array transform
    ///
    /// # Example
    /// ```text
    /// $>id.#directorId
    /// ```
    MapOperator { position: usize },

    /// Constant placed under `key`
    ///
    /// # Example
    /// ```text
    /// limit:99
    /// ```
    ValueAssignment {
        key: String,
        literal: Literal,
        position: usize,
    },
}

impl Segment {
    pub fn position(&self) -> usize {
        match self {
            Segment::PathSegment { position, .. }
            | Segment::PropertyAccess { position, .. }
            | Segment::InputReference { position }
            | Segment::MapOperator { position }
            | Segment::ValueAssignment { position, .. } => *position,
        }
    }
}
