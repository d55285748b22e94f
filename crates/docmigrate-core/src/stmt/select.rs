use super::{Filter, Path, Statement};

/// Reads documents from a namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub namespace: String,
    pub returning: Returning,
    pub filter: Option<Filter>,

    /// Ascending sort keys
    pub order_by: Vec<Path>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Each row is the full document.
    Document,

    /// A single row `{"count": n}`.
    Count,
}

impl Select {
    pub fn documents(namespace: impl Into<String>) -> Select {
        Select {
            namespace: namespace.into(),
            returning: Returning::Document,
            filter: None,
            order_by: vec![],
        }
    }

    pub fn count(namespace: impl Into<String>) -> Select {
        Select {
            returning: Returning::Count,
            ..Select::documents(namespace)
        }
    }

    pub fn filter(mut self, filter: Filter) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(filter),
            None => filter,
        });
        self
    }

    pub fn order_by(mut self, path: impl Into<Path>) -> Select {
        self.order_by.push(path.into());
        self
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
