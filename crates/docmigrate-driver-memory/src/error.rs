use std::fmt;

/// Failures reported by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    NamespaceExists(String),
    NamespaceNotFound(String),
    IndexExists { namespace: String, name: String },
    IndexNotFound { namespace: String, name: String },
    DuplicateKey(String),

    /// Caller-supplied statement text cannot be interpreted.
    RawStatement(String),

    /// A thread panicked while holding the store lock.
    Poisoned,
}

impl std::error::Error for MemoryError {}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::NamespaceExists(name) => write!(f, "namespace `{name}` already exists"),
            MemoryError::NamespaceNotFound(name) => write!(f, "namespace `{name}` not found"),
            MemoryError::IndexExists { namespace, name } => {
                write!(f, "index `{name}` already exists on `{namespace}`")
            }
            MemoryError::IndexNotFound { namespace, name } => {
                write!(f, "index `{name}` not found on `{namespace}`")
            }
            MemoryError::DuplicateKey(key) => write!(f, "duplicate key `{key}`"),
            MemoryError::RawStatement(sql) => {
                write!(f, "raw statements are not supported in memory: {sql}")
            }
            MemoryError::Poisoned => f.write_str("store lock poisoned"),
        }
    }
}
