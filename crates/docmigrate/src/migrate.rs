use crate::{Columns, Driver, LedgerRecord, MigrationRecord, SeedRecord};

use docmigrate_core::{
    async_trait,
    driver::{NamespaceOptions, Operation, Response},
    schema::{ColumnSpec, FieldType, Model, ModelSchema},
    Error, Result,
};

use tracing::info;

/// The operations a migration framework drives a database through.
///
/// Tables are models, rows are documents tagged with their model name and
/// columns are paths into those documents. Operations the store cannot
/// express fail with [`UNSUPPORTED`](crate::UNSUPPORTED) without contacting
/// the store.
#[async_trait]
pub trait Migrate: Send + Sync {
    /// Creates (and registers) a model.
    ///
    /// `migration`/`migrations` and `seeds` name the ledger's own models and
    /// are answered without registering anything.
    async fn create_table(&mut self, name: &str, schema: ModelSchema) -> Result<Model>;

    async fn drop_table(&self, name: &str) -> Result<()>;

    /// Unsupported: the model's indexes would be orphaned.
    async fn rename_table(&self, name: &str, new_name: &str) -> Result<()>;

    /// Adds a path to every document of `model`, set to null.
    async fn add_column(&self, model: &str, path: &str, spec: &ColumnSpec) -> Result<Response>;

    async fn remove_column(&self, model: &str, path: &str) -> Result<Response>;

    /// Moves a path. Indexes over the old path are not migrated; drop and
    /// recreate them around the rename.
    async fn rename_column(&self, model: &str, from: &str, to: &str) -> Result<Response>;

    async fn change_column(&self, model: &str, path: &str, spec: &ColumnSpec) -> Result<()>;

    async fn add_index(&self, model: &str, name: &str, columns: Columns) -> Result<Response>;

    async fn remove_index(&self, name: &str) -> Result<Response>;

    /// Unsupported: rows given as column and value arrays have no document key.
    async fn insert(
        &self,
        table: &str,
        columns: &[String],
        values: &[serde_json::Value],
    ) -> Result<()>;

    async fn add_foreign_key(&self, table: &str, referenced_table: &str, key_name: &str)
        -> Result<()>;

    async fn remove_foreign_key(&self, table: &str, key_name: &str) -> Result<()>;

    /// Creates a namespace with default options and makes it active.
    async fn create_collection(&mut self, name: &str) -> Result<()>;

    async fn drop_collection(&mut self, name: &str) -> Result<()>;

    async fn rename_collection(&self, name: &str, new_name: &str) -> Result<()>;

    async fn run_sql(&self, sql: &str, params: Vec<serde_json::Value>) -> Result<Response>;

    async fn all(&self, sql: &str, params: Vec<serde_json::Value>) -> Result<Response>;

    /// The field type used to store a framework column type.
    fn map_data_type(&self, spec: &ColumnSpec) -> FieldType;

    async fn start_migration(&self) -> Result<()>;

    async fn end_migration(&self) -> Result<()>;

    async fn add_migration_record(&self, name: &str) -> Result<MigrationRecord>;

    /// Every migration record, ordered by `(run_on, name)`, read with
    /// request-plus consistency.
    async fn all_loaded_migrations(&self) -> Result<Vec<MigrationRecord>>;

    /// Deletes every migration record named `name`. Returns the number of
    /// deleted records; zero means nothing matched.
    async fn delete_migration(&self, name: &str) -> Result<u64>;

    async fn add_seed_record(&self, name: &str) -> Result<SeedRecord>;

    async fn all_loaded_seeds(&self) -> Result<Vec<SeedRecord>>;

    async fn delete_seed(&self, name: &str) -> Result<u64>;

    async fn close(&mut self) -> Result<()>;
}

/// Operations with no document store statement. They are refused whatever
/// the provider's capability reports.
pub(crate) const UNTRANSLATED: [Operation; 7] = [
    Operation::DropTable,
    Operation::RenameTable,
    Operation::ChangeColumn,
    Operation::Insert,
    Operation::AddForeignKey,
    Operation::RemoveForeignKey,
    Operation::RenameCollection,
];

fn unsupported<T>(op: Operation) -> Result<T> {
    debug_assert!(UNTRANSLATED.contains(&op));
    Err(Error::unsupported_operation(op.name()))
}

#[async_trait]
impl Migrate for Driver {
    async fn create_table(&mut self, name: &str, schema: ModelSchema) -> Result<Model> {
        if MigrationRecord::RESERVED_NAMES.contains(&name) {
            return Ok(self.ledger_model::<MigrationRecord>());
        }

        if SeedRecord::RESERVED_NAMES.contains(&name) {
            return Ok(self.ledger_model::<SeedRecord>());
        }

        info!(model = name, fields = schema.len(), "create_table");

        let mut model = Model::new(name, schema);
        model.namespace = self.active_namespace_name().map(str::to_string);
        self.register_model(model.clone());
        Ok(model)
    }

    async fn drop_table(&self, name: &str) -> Result<()> {
        info!(model = name, "drop_table");
        unsupported(Operation::DropTable)
    }

    async fn rename_table(&self, name: &str, new_name: &str) -> Result<()> {
        info!(model = name, new_name, "rename_table");
        unsupported(Operation::RenameTable)
    }

    async fn add_column(&self, model: &str, path: &str, spec: &ColumnSpec) -> Result<Response> {
        info!(model, path, ?spec, "add_column");
        let stmt = self.translator().add_field(model, path)?;
        self.exec(stmt).await
    }

    async fn remove_column(&self, model: &str, path: &str) -> Result<Response> {
        info!(model, path, "remove_column");
        let stmt = self.translator().remove_field(model, path)?;
        self.exec(stmt).await
    }

    async fn rename_column(&self, model: &str, from: &str, to: &str) -> Result<Response> {
        info!(model, from, to, "rename_column");
        let stmt = self.translator().rename_field(model, from, to)?;
        self.exec(stmt).await
    }

    async fn change_column(&self, model: &str, path: &str, spec: &ColumnSpec) -> Result<()> {
        info!(model, path, ?spec, "change_column");
        unsupported(Operation::ChangeColumn)
    }

    async fn add_index(&self, model: &str, name: &str, columns: Columns) -> Result<Response> {
        info!(model, index = name, columns = ?columns.as_slice(), "add_index");
        let stmt = self.translator().add_index(model, name, columns)?;
        self.exec(stmt).await
    }

    async fn remove_index(&self, name: &str) -> Result<Response> {
        info!(index = name, "remove_index");
        let stmt = self.translator().remove_index(name)?;
        self.exec(stmt).await
    }

    async fn insert(
        &self,
        table: &str,
        columns: &[String],
        values: &[serde_json::Value],
    ) -> Result<()> {
        info!(table, ?columns, ?values, "insert");
        unsupported(Operation::Insert)
    }

    async fn add_foreign_key(
        &self,
        table: &str,
        referenced_table: &str,
        key_name: &str,
    ) -> Result<()> {
        info!(table, referenced_table, key_name, "add_foreign_key");
        unsupported(Operation::AddForeignKey)
    }

    async fn remove_foreign_key(&self, table: &str, key_name: &str) -> Result<()> {
        info!(table, key_name, "remove_foreign_key");
        unsupported(Operation::RemoveForeignKey)
    }

    async fn create_collection(&mut self, name: &str) -> Result<()> {
        self.create_namespace(name, &NamespaceOptions::default())
            .await
    }

    async fn drop_collection(&mut self, name: &str) -> Result<()> {
        self.drop_namespace(name).await
    }

    async fn rename_collection(&self, name: &str, new_name: &str) -> Result<()> {
        info!(namespace = name, new_name, "rename_collection");
        unsupported(Operation::RenameCollection)
    }

    async fn run_sql(&self, sql: &str, params: Vec<serde_json::Value>) -> Result<Response> {
        info!(sql, ?params, "run_sql");
        self.run_n1ql(sql, params).await
    }

    async fn all(&self, sql: &str, params: Vec<serde_json::Value>) -> Result<Response> {
        info!(sql, ?params, "all");
        self.run_n1ql(sql, params).await
    }

    fn map_data_type(&self, spec: &ColumnSpec) -> FieldType {
        spec.field_type()
    }

    async fn start_migration(&self) -> Result<()> {
        info!("start_migration");
        Ok(())
    }

    async fn end_migration(&self) -> Result<()> {
        info!("end_migration");
        Ok(())
    }

    async fn add_migration_record(&self, name: &str) -> Result<MigrationRecord> {
        info!(name, "add_migration_record");
        self.add_record(name).await
    }

    async fn all_loaded_migrations(&self) -> Result<Vec<MigrationRecord>> {
        info!("all_loaded_migrations");
        self.all_records().await
    }

    async fn delete_migration(&self, name: &str) -> Result<u64> {
        info!(name, "delete_migration");
        self.delete_records::<MigrationRecord>(name).await
    }

    async fn add_seed_record(&self, name: &str) -> Result<SeedRecord> {
        info!(name, "add_seed_record");
        self.add_record(name).await
    }

    async fn all_loaded_seeds(&self) -> Result<Vec<SeedRecord>> {
        info!("all_loaded_seeds");
        self.all_records().await
    }

    async fn delete_seed(&self, name: &str) -> Result<u64> {
        info!(name, "delete_seed");
        self.delete_records::<SeedRecord>(name).await
    }

    async fn close(&mut self) -> Result<()> {
        info!("close");
        self.close_impl().await
    }
}
