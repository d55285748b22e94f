mod builder;
pub use builder::Builder;

mod config;
pub use config::Config;

mod driver;
pub use driver::Driver;

mod engine;
use engine::Engine;

mod index_info;
pub use index_info::IndexInfo;

pub mod ledger;
pub use ledger::{LedgerRecord, MigrationRecord, SeedRecord};

mod migrate;
pub use migrate::Migrate;

mod registry;
pub use registry::Registry;

pub mod translate;
pub use translate::Columns;

pub use docmigrate_core::{
    driver::{Capability, Consistency, NamespaceOptions, Response},
    schema::{ColumnSpec, DataType, Field, FieldType, Model, ModelSchema},
    ConnectionProvider, Error, Result, Transport, UNSUPPORTED,
};
