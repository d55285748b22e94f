use super::Statement;

/// Caller-supplied statement text, executed as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub sql: String,
    pub params: Vec<serde_json::Value>,
}

impl From<Raw> for Statement {
    fn from(value: Raw) -> Self {
        Self::Raw(value)
    }
}
