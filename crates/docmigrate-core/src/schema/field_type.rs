use std::fmt;

/// Primitive type of a document field, using the object-document mapper's
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,

    #[serde(rename = "number")]
    Number,

    #[serde(rename = "integer")]
    Integer,

    #[serde(rename = "boolean")]
    Boolean,

    #[serde(rename = "Date", alias = "date")]
    Date,

    #[serde(rename = "Mixed", alias = "mixed")]
    Mixed,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Integer,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Mixed,
    ];

    /// Parses a field type name. Only the exact spellings used by the mapper
    /// (`string`, `integer`, `Date`, `number`, `boolean`, `Mixed`) and the
    /// lowercase `date`/`mixed` are accepted.
    pub fn from_name(name: &str) -> Option<FieldType> {
        Some(match name {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "integer" => FieldType::Integer,
            "boolean" => FieldType::Boolean,
            "Date" | "date" => FieldType::Date,
            "Mixed" | "mixed" => FieldType::Mixed,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Date => "Date",
            FieldType::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
