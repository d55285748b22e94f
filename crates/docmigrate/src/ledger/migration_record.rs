use super::LedgerRecord;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A migration that has been run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MigrationRecord {
    pub oid: Uuid,
    pub name: String,
    pub run_on: DateTime<Utc>,
}

impl LedgerRecord for MigrationRecord {
    const MODEL: &'static str = "MigrationRun";

    const RESERVED_NAMES: &'static [&'static str] = &["migration", "migrations"];

    fn new(name: &str) -> Self {
        MigrationRecord {
            oid: Uuid::new_v4(),
            name: name.to_string(),
            run_on: Utc::now(),
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
}
