use super::Error;

/// The literal every unsupported operation reports.
///
/// Migration frameworks match on this text to detect the capability gap.
pub const UNSUPPORTED: &str = "operation not supported";

/// Error when an operation has no safe translation for the store.
///
/// These are returned without contacting the store.
#[derive(Debug)]
pub(super) struct UnsupportedOperationError {
    operation: &'static str,
}

impl std::error::Error for UnsupportedOperationError {}

impl core::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(UNSUPPORTED)
    }
}

impl Error {
    /// Creates an unsupported operation error for the named operation.
    pub fn unsupported_operation(operation: &'static str) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperationError { operation },
        ))
    }

    /// Returns `true` if this error is an unsupported operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }

    /// Returns the name of the operation that was refused.
    pub fn unsupported_operation_name(&self) -> Option<&'static str> {
        match self.kind() {
            super::ErrorKind::UnsupportedOperation(err) => Some(err.operation),
            _ => None,
        }
    }
}
