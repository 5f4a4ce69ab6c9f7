use crate::ast::Segment;

/// One semicolon-delimited clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Phrase {
    /// Leading path segments closed by `$` or `#name`
    ///
    /// # Examples
    /// ```text
    /// where.directorId.in.$
    /// where.name.#title
    /// ```
    Path { segments: Vec<Segment> },

    /// Leading path segments closed by a `key:value` assignment
    ///
    /// # Examples
    /// ```text
    /// limit:99
    /// a.limit:99.9
    /// ```
    Value { segments: Vec<Segment> },

    /// Per-element array transform
    ///
    /// `segments` always starts with the map operator. `prefix` holds the
    /// path segments written before `$>`, which wrap the resulting array.
    ///
    /// # Examples
    /// ```text
    /// $>#id
    /// $>id.#directorId
    /// where.id.in.$>#id
    /// ```
    Map {
        prefix: Vec<Segment>,
        segments: Vec<Segment>,
    },
}

impl Phrase {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Phrase::Path { segments } | Phrase::Value { segments } | Phrase::Map { segments, .. } => {
                segments
            }
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Phrase::Path { .. } => "PathPhrase",
            Phrase::Value { .. } => "ValuePhrase",
            Phrase::Map { .. } => "MapPhrase",
        }
    }
}
