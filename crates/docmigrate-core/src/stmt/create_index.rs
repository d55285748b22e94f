use super::{Filter, Path, Statement};

/// A secondary index over one or more document paths.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    /// Name of the index
    pub name: String,

    /// Namespace holding the indexed documents
    pub namespace: String,

    /// Indexed paths, in key order
    pub keys: Vec<Path>,

    /// Partial index condition, usually the type discriminator
    pub filter: Option<Filter>,

    /// Whether or not to add an `IF NOT EXISTS` clause.
    pub if_not_exists: bool,
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
