use super::FieldType;

use indexmap::IndexMap;

/// A logical table: documents tagged with `name` in their type discriminator.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Model name, also the discriminator value of its documents.
    pub name: String,

    pub schema: ModelSchema,

    /// Namespace that was active when the model was created.
    pub namespace: Option<String>,
}

/// Field name to field definition, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ModelSchema {
    pub fields: IndexMap<String, Field>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub ty: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto: Option<Auto>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

/// Values generated by the mapper when a document is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Auto {
    Uuid,
}

impl Model {
    pub fn new(name: impl Into<String>, schema: ModelSchema) -> Model {
        Model {
            name: name.into(),
            schema,
            namespace: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.schema.fields.get(name)
    }
}

impl ModelSchema {
    pub fn new() -> ModelSchema {
        ModelSchema::default()
    }

    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> ModelSchema {
        self.fields.insert(name.into(), field.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Field {
    pub fn new(ty: FieldType) -> Field {
        Field {
            ty,
            default: None,
            auto: None,
            readonly: false,
        }
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Field {
        self.default = Some(value.into());
        self
    }

    pub fn auto(mut self, auto: Auto) -> Field {
        self.auto = Some(auto);
        self
    }

    pub fn readonly(mut self) -> Field {
        self.readonly = true;
        self
    }
}

impl From<FieldType> for Field {
    fn from(ty: FieldType) -> Self {
        Field::new(ty)
    }
}
