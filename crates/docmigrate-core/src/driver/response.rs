/// Result of executing a [`Query`](super::Query).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub rows: Vec<serde_json::Value>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meta {
    /// Documents created, modified or removed by the statement
    pub mutation_count: u64,

    /// Number of rows returned
    pub result_count: u64,
}

impl Response {
    /// A response carrying rows and no mutations.
    pub fn rows(rows: Vec<serde_json::Value>) -> Self {
        let result_count = rows.len() as u64;

        Self {
            rows,
            meta: Meta {
                mutation_count: 0,
                result_count,
            },
        }
    }

    /// A response to a statement that changed `count` documents.
    pub fn mutations(count: u64) -> Self {
        Self {
            rows: vec![],
            meta: Meta {
                mutation_count: count,
                result_count: 0,
            },
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads the `count` column of the first row, as returned by a
    /// `SELECT COUNT(*) AS count` statement.
    pub fn count(&self) -> Option<u64> {
        self.rows.first()?.get("count")?.as_u64()
    }
}
