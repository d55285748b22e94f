use crate::stmt::Statement;

/// A serialized statement ready to run on a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The statement tree the text was generated from.
    pub stmt: Statement,

    /// Statement text, with `$1`, `$2`, ... placeholders.
    pub sql: String,

    /// Positional parameters bound to the placeholders.
    pub params: Vec<serde_json::Value>,

    pub consistency: Consistency,
}

/// Read consistency requested for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Consistency {
    /// Return whatever the indexes currently hold.
    #[default]
    NotBounded,

    /// Wait until every mutation completed before the request is indexed.
    RequestPlus,
}

impl Consistency {
    /// Name of the consistency level on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Consistency::NotBounded => "not_bounded",
            Consistency::RequestPlus => "request_plus",
        }
    }
}
