use super::Error;

/// Error about the namespace (bucket) an operation targets.
#[derive(Debug)]
pub(super) enum NamespaceError {
    /// No namespace is active, typically after the active one was dropped.
    NoActive,

    /// The connection provider failed to open, create or drop a namespace.
    Failed { name: Box<str>, action: &'static str },
}

impl std::error::Error for NamespaceError {}

impl core::fmt::Display for NamespaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            NamespaceError::NoActive => f.write_str("no active bucket"),
            NamespaceError::Failed { name, action } => {
                write!(f, "failed to {action} bucket `{name}`")
            }
        }
    }
}

impl Error {
    /// Creates the error returned when no namespace is active.
    pub fn no_active_namespace() -> Error {
        Error::from(super::ErrorKind::Namespace(NamespaceError::NoActive))
    }

    /// Wraps a provider failure for the namespace `name`.
    ///
    /// `action` is a verb such as `"open"`, `"create"` or `"drop"`.
    pub fn namespace(name: &str, action: &'static str, cause: Error) -> Error {
        cause.context(Error::from(super::ErrorKind::Namespace(
            NamespaceError::Failed {
                name: name.into(),
                action,
            },
        )))
    }

    /// Returns `true` if this error is a namespace error.
    pub fn is_namespace(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Namespace(_))
    }

    /// Returns `true` if this error reports a missing active namespace.
    pub fn is_no_active_namespace(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Namespace(NamespaceError::NoActive)
        )
    }
}
