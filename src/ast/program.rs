use crate::ast::Phrase;

/// A parsed phrase string.
///
/// Phrase order is significant: later phrases merge on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub phrases: Vec<Phrase>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
