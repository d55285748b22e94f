use super::FieldType;

/// Column types of the relational migration framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Char,
    String,
    Text,
    SmallInt,
    BigInt,
    Integer,
    Real,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Time,
    Timestamp,
    Blob,
    Binary,
}

impl DataType {
    /// Parses the framework's type name (`char`, `int`, `datetime`, ...).
    pub fn from_name(name: &str) -> Option<DataType> {
        Some(match name {
            "char" => DataType::Char,
            "string" => DataType::String,
            "text" => DataType::Text,
            "smallint" => DataType::SmallInt,
            "bigint" => DataType::BigInt,
            "int" => DataType::Integer,
            "real" => DataType::Real,
            "decimal" => DataType::Decimal,
            "boolean" => DataType::Boolean,
            "date" => DataType::Date,
            "datetime" => DataType::DateTime,
            "time" => DataType::Time,
            "timestamp" => DataType::Timestamp,
            "blob" => DataType::Blob,
            "binary" => DataType::Binary,
            _ => return None,
        })
    }

    /// The document field type used to store values of this column type.
    ///
    /// `bigint` is kept as a string because it does not fit a JSON number.
    /// Types without a natural document equivalent are stored as strings.
    pub fn field_type(self) -> FieldType {
        match self {
            DataType::Char | DataType::String | DataType::Text => FieldType::String,
            DataType::SmallInt | DataType::Integer => FieldType::Integer,
            DataType::BigInt => FieldType::String,
            DataType::Real | DataType::Decimal => FieldType::Number,
            DataType::Boolean => FieldType::Boolean,
            DataType::Date | DataType::DateTime => FieldType::Date,
            DataType::Blob | DataType::Time | DataType::Binary => FieldType::String,
            DataType::Timestamp => FieldType::String,
        }
    }
}

/// Column description passed along with "add column".
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Framework or mapper type name.
    #[serde(rename = "type", default)]
    pub ty: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    #[serde(default)]
    pub not_null: bool,
}

impl ColumnSpec {
    pub fn new(ty: impl Into<String>) -> ColumnSpec {
        ColumnSpec {
            ty: ty.into(),
            ..ColumnSpec::default()
        }
    }

    /// Maps the column type onto a document field type.
    ///
    /// Names already in the mapper's vocabulary pass through; framework type
    /// names are translated; anything else is stored as a string.
    pub fn field_type(&self) -> FieldType {
        if let Some(ty) = FieldType::from_name(&self.ty) {
            return ty;
        }

        DataType::from_name(&self.ty)
            .map(DataType::field_type)
            .unwrap_or(FieldType::String)
    }
}
