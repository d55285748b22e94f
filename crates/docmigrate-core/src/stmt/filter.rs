use super::Path;
use crate::TYPE_DISCRIMINATOR;

/// A `WHERE` predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// The document's type discriminator equals the given model name.
    ///
    /// Always serialized as a literal so it can appear in index definitions.
    TypeIs(String),

    /// The value at the path equals a bound value.
    Eq(Path, serde_json::Value),

    IsMissing(Path),

    IsNotMissing(Path),

    And(Vec<Filter>),
}

impl Filter {
    pub fn type_is(model: impl Into<String>) -> Filter {
        Filter::TypeIs(model.into())
    }

    pub fn eq(path: impl Into<Path>, value: impl Into<serde_json::Value>) -> Filter {
        Filter::Eq(path.into(), value.into())
    }

    pub fn is_missing(path: impl Into<Path>) -> Filter {
        Filter::IsMissing(path.into())
    }

    pub fn is_not_missing(path: impl Into<Path>) -> Filter {
        Filter::IsNotMissing(path.into())
    }

    /// Conjunction of `self` and `other`, flattening nested `And`s.
    pub fn and(self, other: Filter) -> Filter {
        let mut operands = match self {
            Filter::And(operands) => operands,
            filter => vec![filter],
        };

        match other {
            Filter::And(more) => operands.extend(more),
            filter => operands.push(filter),
        }

        Filter::And(operands)
    }

    /// The model name this filter restricts to, if it restricts to one.
    pub fn model(&self) -> Option<&str> {
        match self {
            Filter::TypeIs(model) => Some(model),
            Filter::And(operands) => operands.iter().find_map(Filter::model),
            _ => None,
        }
    }

    /// Path of the type discriminator field.
    pub fn discriminator() -> Path {
        Path::parse(TYPE_DISCRIMINATOR)
    }
}
