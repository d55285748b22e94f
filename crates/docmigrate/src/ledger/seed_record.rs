use super::LedgerRecord;

use docmigrate_core::schema::{Field, FieldType, ModelSchema};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A seed that has been run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SeedRecord {
    pub oid: Uuid,
    pub name: String,
    pub run_on: DateTime<Utc>,

    #[serde(rename = "ifNotExists", default = "default_if_not_exists")]
    pub if_not_exists: bool,
}

fn default_if_not_exists() -> bool {
    true
}

impl LedgerRecord for SeedRecord {
    const MODEL: &'static str = "MigrationSeed";

    const RESERVED_NAMES: &'static [&'static str] = &["seeds"];

    fn new(name: &str) -> Self {
        SeedRecord {
            oid: Uuid::new_v4(),
            name: name.to_string(),
            run_on: Utc::now(),
            if_not_exists: true,
        }
    }

    fn oid(&self) -> Uuid {
        self.oid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn run_on(&self) -> DateTime<Utc> {
        self.run_on
    }

    fn schema() -> ModelSchema {
        super::base_schema().field(
            "ifNotExists",
            Field::new(FieldType::Boolean).default_value(true),
        )
    }
}
