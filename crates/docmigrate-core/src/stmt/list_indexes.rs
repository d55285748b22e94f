use super::Statement;

/// Lists the index catalog entries of a namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ListIndexes {
    pub namespace: String,
}

impl From<ListIndexes> for Statement {
    fn from(value: ListIndexes) -> Self {
        Self::ListIndexes(value)
    }
}
