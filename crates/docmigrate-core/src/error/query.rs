use super::Error;

/// Error when the store rejects or fails to execute a generated statement.
///
/// Carries the statement text so the failure can be reproduced by hand.
#[derive(Debug)]
pub(super) struct QueryError {
    pub(super) statement: Box<str>,
    pub(super) cause: Error,
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "query failed: {}: {}", self.statement, self.cause)
    }
}

impl Error {
    /// Wraps a transport failure together with the statement that was attempted.
    pub fn query(statement: impl Into<String>, cause: Error) -> Error {
        Error::from(super::ErrorKind::Query(QueryError {
            statement: statement.into().into(),
            cause,
        }))
    }

    /// Returns `true` if this error is a query error.
    pub fn is_query(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Query(_))
    }

    /// Returns the statement text of a query error.
    pub fn query_statement(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::Query(err) => Some(&err.statement),
            _ => None,
        }
    }
}
