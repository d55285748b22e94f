use super::{Filter, Statement};

/// Deletes every document matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub namespace: String,
    pub filter: Filter,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
