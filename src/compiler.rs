use crate::{
    ast::{Phrase, Program, Segment},
    transform::{Body, Composition, Field, Step, Transform},
    value::Value,
};

/// Raised when a syntax tree breaks the layout the parser guarantees.
///
/// The parser never produces such trees; this only fires for programs built
/// or edited by hand.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("Malformed {phrase} at position {position}: {reason}")]
    MalformedPhrase {
        phrase: &'static str,
        position: usize,
        reason: &'static str,
    },
}

/// Key used by a map group that has no path segment of its own.
const DEFAULT_KEY: &str = "id";

/// Lowers a [`Program`] into a [`Transform`].
#[derive(Debug, Default)]
pub struct Compiler;

impl Compiler {
    pub fn new() -> Self {
        Self
    }

    /// Compiles every phrase and picks how their results are combined.
    ///
    /// - no phrases: the transform always returns `{}`
    /// - one phrase: its result is returned unchanged
    /// - two or more map phrases without prefix: one object per input
    ///   element, every phrase adding sibling keys to it
    /// - anything else: phrase results are deep-merged left to right
    pub fn compile(&self, program: &Program) -> Result<Transform, CompileError> {
        let composition = match program.phrases.as_slice() {
            [] => Composition::Empty,
            [phrase] => Composition::Single(self.compile_phrase(phrase)?),
            phrases => match bare_maps(phrases) {
                Some(maps) => {
                    let mut fields = vec![];
                    for (phrase, segments) in maps {
                        fields.extend(self.map_fields(phrase, segments)?);
                    }
                    Composition::Columns(fields)
                }
                None => Composition::Merge(
                    phrases
                        .iter()
                        .map(|phrase| self.compile_phrase(phrase))
                        .collect::<Result<_, _>>()?,
                ),
            },
        };

        log::debug!(
            "compiled {} phrase(s) into a {} transform",
            program.phrases.len(),
            composition.name()
        );
        Ok(Transform::new(composition))
    }

    fn compile_phrase(&self, phrase: &Phrase) -> Result<Step, CompileError> {
        match phrase {
            Phrase::Path { segments } => self.compile_path(phrase, segments),
            Phrase::Value { segments } => self.compile_value(phrase, segments),
            Phrase::Map { prefix, segments } => {
                let wrap = path_names(phrase, prefix)?;
                let fields = self.map_fields(phrase, segments)?;

                // `$>#name` on its own plucks instead of building objects
                let body = match segments.as_slice() {
                    [_, Segment::PropertyAccess { name, .. }] => Body::Pluck(name.clone()),
                    _ => Body::Project(fields),
                };
                Ok(Step { wrap, body })
            }
        }
    }

    fn compile_path(&self, phrase: &Phrase, segments: &[Segment]) -> Result<Step, CompileError> {
        let Some((last, leading)) = segments.split_last() else {
            return Err(malformed(phrase, 0, "phrase has no segments"));
        };

        let body = match last {
            Segment::InputReference { .. } => Body::Input,
            Segment::PropertyAccess { name, .. } => Body::Property(name.clone()),
            other => {
                return Err(malformed(
                    phrase,
                    other.position(),
                    "path must end with `$` or `#name`",
                ));
            }
        };

        Ok(Step {
            wrap: path_names(phrase, leading)?,
            body,
        })
    }

    fn compile_value(&self, phrase: &Phrase, segments: &[Segment]) -> Result<Step, CompileError> {
        let Some((last, leading)) = segments.split_last() else {
            return Err(malformed(phrase, 0, "phrase has no segments"));
        };

        let Segment::ValueAssignment { key, literal, .. } = last else {
            return Err(malformed(
                phrase,
                last.position(),
                "value phrase must end with `key:value`",
            ));
        };

        let mut wrap = path_names(phrase, leading)?;
        wrap.push(key.clone());
        Ok(Step {
            wrap,
            body: Body::Literal(Value::from(literal)),
        })
    }

    /// Groups the steps after `$>` into fields. Path segments accumulate a
    /// key path that the next property access closes; a trailing key path
    /// that nothing closes contributes no field.
    fn map_fields(&self, phrase: &Phrase, segments: &[Segment]) -> Result<Vec<Field>, CompileError> {
        let Some((first, steps)) = segments.split_first() else {
            return Err(malformed(phrase, 0, "phrase has no segments"));
        };
        if !matches!(first, Segment::MapOperator { .. }) {
            return Err(malformed(
                phrase,
                first.position(),
                "map phrase must start with `$>`",
            ));
        }

        let mut fields = vec![];
        let mut path = vec![];

        for segment in steps {
            match segment {
                Segment::PathSegment { name, .. } => path.push(name.clone()),
                Segment::PropertyAccess { name, .. } => {
                    if path.is_empty() {
                        path.push(DEFAULT_KEY.to_string());
                    }
                    fields.push(Field {
                        path: std::mem::take(&mut path),
                        property: name.clone(),
                    });
                }
                other => {
                    return Err(malformed(
                        phrase,
                        other.position(),
                        "only path steps and `#name` may follow `$>`",
                    ));
                }
            }
        }

        if !path.is_empty() {
            log::debug!("dropping map key `{}` with no property to read", path.join("."));
        }

        Ok(fields)
    }
}

/// Returns the map segments of every phrase when all of them are map phrases
/// without a prefix and there is more than one.
fn bare_maps(phrases: &[Phrase]) -> Option<Vec<(&Phrase, &[Segment])>> {
    if phrases.len() < 2 {
        return None;
    }
    phrases
        .iter()
        .map(|phrase| match phrase {
            Phrase::Map { prefix, segments } if prefix.is_empty() => Some((phrase, segments.as_slice())),
            _ => None,
        })
        .collect()
}

fn path_names(phrase: &Phrase, segments: &[Segment]) -> Result<Vec<String>, CompileError> {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::PathSegment { name, .. } => Ok(name.clone()),
            other => Err(malformed(
                phrase,
                other.position(),
                "only path segments may lead a phrase",
            )),
        })
        .collect()
}

fn malformed(phrase: &Phrase, position: usize, reason: &'static str) -> CompileError {
    CompileError::MalformedPhrase {
        phrase: phrase.kind_name(),
        position,
        reason,
    }
}
