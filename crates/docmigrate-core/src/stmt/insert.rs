use super::Statement;

/// Inserts a single document under an explicit key.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub namespace: String,
    pub key: String,
    pub value: serde_json::Value,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
