use super::Error;

/// Error when a field type change has no safe translation.
#[derive(Debug)]
pub(super) struct ConversionError {
    from: Box<str>,
    to: Box<str>,
    kind: ConversionErrorKind,
}

#[derive(Debug)]
enum ConversionErrorKind {
    /// `from == to`
    SameType,

    /// The source type has no row in the conversion matrix.
    UnknownSource,

    /// The source row has no entry for the target type.
    NoRule,

    /// The matrix holds a rejection reason for this pair.
    Rejected(&'static str),
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let Self { from, to, kind } = self;

        match kind {
            ConversionErrorKind::SameType => f.write_str("Cannot convert from one type to itself"),
            ConversionErrorKind::UnknownSource => {
                write!(f, "Conversion of type {from} is not supported")
            }
            ConversionErrorKind::NoRule => {
                write!(f, "Type {from} does not have a supported conversion to {to}")
            }
            ConversionErrorKind::Rejected(reason) => {
                write!(f, "Can't convert {from} to {to}: {reason}")
            }
        }
    }
}

impl Error {
    fn conversion(from: &str, to: &str, kind: ConversionErrorKind) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            from: from.into(),
            to: to.into(),
            kind,
        }))
    }

    /// Creates an error for converting a type to itself.
    pub fn conversion_to_self(ty: &str) -> Error {
        Error::conversion(ty, ty, ConversionErrorKind::SameType)
    }

    /// Creates an error for a source type without any known conversion.
    pub fn conversion_unknown_source(from: &str, to: &str) -> Error {
        Error::conversion(from, to, ConversionErrorKind::UnknownSource)
    }

    /// Creates an error for a type pair missing from the conversion matrix.
    pub fn conversion_no_rule(from: &str, to: &str) -> Error {
        Error::conversion(from, to, ConversionErrorKind::NoRule)
    }

    /// Creates an error for a type pair the conversion matrix explicitly rejects.
    pub fn conversion_rejected(from: &str, to: &str, reason: &'static str) -> Error {
        Error::conversion(from, to, ConversionErrorKind::Rejected(reason))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Conversion(_))
    }

    /// Returns the rejection reason recorded in the conversion matrix, if any.
    pub fn conversion_reason(&self) -> Option<&'static str> {
        match self.kind() {
            super::ErrorKind::Conversion(ConversionError {
                kind: ConversionErrorKind::Rejected(reason),
                ..
            }) => Some(reason),
            _ => None,
        }
    }
}
