use super::Statement;

/// A statement to drop an index.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    /// Namespace the index was created on.
    pub namespace: String,

    /// Name of the index.
    pub name: String,
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
