use super::Path;

/// Right-hand side of a `SET` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The store's null value.
    Null,

    /// The current value found at another path of the same document.
    Path(Path),

    /// A scalar cast applied to the value at a path.
    Convert(Conversion, Path),

    /// A bound value.
    Value(serde_json::Value),
}

/// Store-native scalar casts used by type changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    ToNumber,
    ToBoolean,
    ToString,
}

impl Expr {
    pub fn convert(conversion: Conversion, path: impl Into<Path>) -> Expr {
        Expr::Convert(conversion, path.into())
    }

    pub fn path(path: impl Into<Path>) -> Expr {
        Expr::Path(path.into())
    }
}

impl From<serde_json::Value> for Expr {
    fn from(value: serde_json::Value) -> Self {
        if value.is_null() {
            Expr::Null
        } else {
            Expr::Value(value)
        }
    }
}

impl Conversion {
    /// Name of the N1QL function performing the cast.
    pub fn function_name(self) -> &'static str {
        match self {
            Conversion::ToNumber => "TONUMBER",
            Conversion::ToBoolean => "TOBOOLEAN",
            Conversion::ToString => "TOSTRING",
        }
    }
}
