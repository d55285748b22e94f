use super::{Expr, Filter, Path, Statement};

/// `UPDATE <namespace> SET ... UNSET ... WHERE ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub namespace: String,

    /// Assignments, applied in order.
    pub set: Vec<Assignment>,

    /// Paths removed from the document after the assignments.
    pub unset: Vec<Path>,

    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: Path,
    pub expr: Expr,
}

impl Update {
    pub fn new(namespace: impl Into<String>) -> Update {
        Update {
            namespace: namespace.into(),
            set: vec![],
            unset: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, path: impl Into<Path>, expr: impl Into<Expr>) -> Update {
        self.set.push(Assignment {
            path: path.into(),
            expr: expr.into(),
        });
        self
    }

    pub fn unset(mut self, path: impl Into<Path>) -> Update {
        self.unset.push(path.into());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Update {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(filter),
            None => filter,
        });
        self
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
