//! Bookkeeping of the migrations and seeds that have run.
//!
//! Records are stored as documents in the migration namespace, tagged with
//! their record type in the type discriminator and keyed by
//! `<type>|<oid>`. Names are not unique: nothing stops a name from being
//! recorded twice, and deleting a name removes every record carrying it.

mod migration_record;
pub use migration_record::MigrationRecord;

mod seed_record;
pub use seed_record::SeedRecord;

use docmigrate_core::{
    schema::{Auto, Field, FieldType, Model, ModelSchema},
    stmt::{CreateIndex, Delete, Filter, Insert, Select, Statement},
    Result, TYPE_DISCRIMINATOR,
};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A document type stored in the ledger.
pub trait LedgerRecord: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Type discriminator value of the record's documents.
    const MODEL: &'static str;

    /// Model names `create_table` answers with this record's model.
    const RESERVED_NAMES: &'static [&'static str];

    /// A new record named `name`, run now.
    fn new(name: &str) -> Self;

    fn oid(&self) -> Uuid;

    fn name(&self) -> &str;

    fn run_on(&self) -> DateTime<Utc>;

    /// Schema of the record's documents.
    fn schema() -> ModelSchema {
        base_schema()
    }

    fn model() -> Model {
        Model::new(Self::MODEL, Self::schema())
    }
}

/// Fields shared by every record type.
fn base_schema() -> ModelSchema {
    ModelSchema::new()
        .field(
            "oid",
            Field::new(FieldType::String).auto(Auto::Uuid).readonly(),
        )
        .field("name", FieldType::String)
        .field("run_on", FieldType::Date)
}

/// Document key of a record.
pub fn key<R: LedgerRecord>(record: &R) -> String {
    format!("{}|{}", R::MODEL, record.oid())
}

pub(crate) fn insert<R: LedgerRecord>(namespace: &str, record: &R) -> Result<Statement> {
    let mut value = serde_json::to_value(record)?;

    if let Some(fields) = value.as_object_mut() {
        fields.insert(TYPE_DISCRIMINATOR.to_string(), R::MODEL.into());
    }

    Ok(Insert {
        namespace: namespace.to_string(),
        key: key(record),
        value,
    }
    .into())
}

/// All records, ordered by `(run_on, name)`.
pub(crate) fn select_all<R: LedgerRecord>(namespace: &str) -> Statement {
    Select::documents(namespace)
        .filter(Filter::type_is(R::MODEL))
        .order_by("run_on")
        .order_by("name")
        .into()
}

pub(crate) fn count_named<R: LedgerRecord>(namespace: &str, name: &str) -> Statement {
    Select::count(namespace)
        .filter(Filter::type_is(R::MODEL))
        .filter(Filter::eq("name", name))
        .into()
}

pub(crate) fn delete_named<R: LedgerRecord>(namespace: &str, name: &str) -> Statement {
    Delete {
        namespace: namespace.to_string(),
        filter: Filter::type_is(R::MODEL).and(Filter::eq("name", name)),
    }
    .into()
}

/// Index backing the ledger queries.
pub(crate) fn index<R: LedgerRecord>(namespace: &str) -> Statement {
    CreateIndex {
        name: format!("ledger_{}", R::MODEL),
        namespace: namespace.to_string(),
        keys: vec!["name".into(), "run_on".into()],
        filter: Some(Filter::type_is(R::MODEL)),
        if_not_exists: true,
    }
    .into()
}

/// Decodes the rows of [`select_all`], sorted by `(run_on, name)`.
pub(crate) fn decode<R: LedgerRecord>(rows: Vec<serde_json::Value>) -> Result<Vec<R>> {
    let mut records = rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<core::result::Result<Vec<R>, _>>()?;

    // The store orders timestamps as text
    records.sort_by(|a, b| (a.run_on(), a.name()).cmp(&(b.run_on(), b.name())));
    Ok(records)
}
