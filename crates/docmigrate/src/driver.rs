use crate::{
    ledger::{self, LedgerRecord},
    migrate::UNTRANSLATED,
    translate::Translator,
    Builder, Engine, IndexInfo, MigrationRecord, Registry, SeedRecord,
};

use docmigrate_core::{
    driver::{Capability, NamespaceOptions, Operation, Response},
    stmt::{Filter, ListIndexes, Raw, Select, Statement},
    ConnectionProvider, Error, Model, Result, Transport,
};

use std::sync::Arc;
use tracing::info;

/// Entry point of the migration driver.
///
/// The driver tracks one *active* namespace that DDL operations target. The
/// migration ledger always lives in the migration namespace, whichever
/// namespace is active.
///
/// Switching namespaces takes `&mut self`. Callers sharing a driver across
/// tasks must serialize switches against in-flight operations themselves.
#[derive(Debug)]
pub struct Driver {
    provider: Arc<dyn ConnectionProvider>,

    /// Handle to the migration namespace
    ledger: Arc<dyn Transport>,

    /// Namespace targeted by DDL. `None` after the active namespace was
    /// dropped.
    active: Option<Arc<dyn Transport>>,

    registry: Registry,

    engine: Engine,
}

impl Driver {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(
        provider: Arc<dyn ConnectionProvider>,
        ledger: Arc<dyn Transport>,
        engine: Engine,
    ) -> Driver {
        let mut registry = Registry::new();
        registry.register(MigrationRecord::model());
        registry.register(SeedRecord::model());

        Driver {
            provider,
            active: Some(ledger.clone()),
            ledger,
            registry,
            engine,
        }
    }

    pub fn capability(&self) -> &Capability {
        self.provider.capability()
    }

    /// Returns `true` if the named operation can be carried out.
    ///
    /// Accepts framework names such as `renameTable` or `runN1ql` as well as
    /// the method names of this crate. Unknown names are not supported, and
    /// neither are operations this driver has no statement for, even when the
    /// provider's capability allows them.
    pub fn supports(&self, name: &str) -> bool {
        Operation::from_name(name)
            .is_some_and(|op| !UNTRANSLATED.contains(&op) && self.capability().supports(op))
    }

    pub fn is_dry_run(&self) -> bool {
        self.engine.is_dry_run()
    }

    pub fn active_namespace_name(&self) -> Option<&str> {
        self.active.as_deref().map(|transport| transport.namespace())
    }

    pub fn migration_namespace_name(&self) -> &str {
        self.ledger.namespace()
    }

    /// Opens `name` and makes it the active namespace.
    ///
    /// The active namespace only changes once the namespace is open; on
    /// failure the previous one stays active.
    pub async fn switch_namespace(&mut self, name: &str) -> Result<()> {
        info!(namespace = name, "opening active namespace");

        let transport = self
            .provider
            .open_namespace(name)
            .await
            .map_err(|err| Error::namespace(name, "open", err))?;

        self.active = Some(transport);
        Ok(())
    }

    /// Like [`Driver::switch_namespace`], returning the driver for chaining.
    pub async fn with_namespace(&mut self, name: &str) -> Result<&mut Driver> {
        self.switch_namespace(name).await?;
        Ok(self)
    }

    /// Creates a namespace and makes it active.
    pub async fn create_namespace(&mut self, name: &str, options: &NamespaceOptions) -> Result<()> {
        info!(namespace = name, ?options, "create_namespace");

        let transport = self
            .provider
            .create_namespace(name, options)
            .await
            .map_err(|err| Error::namespace(name, "create", err))?;

        self.active = Some(transport);
        Ok(())
    }

    /// Drops a namespace. Dropping the active namespace leaves no namespace
    /// active.
    pub async fn drop_namespace(&mut self, name: &str) -> Result<()> {
        info!(namespace = name, "drop_namespace");

        self.provider
            .drop_namespace(name)
            .await
            .map_err(|err| Error::namespace(name, "drop", err))?;

        if self.active_namespace_name() == Some(name) {
            self.active = None;
        }

        Ok(())
    }

    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        info!("list_namespaces");
        self.provider.list_namespaces().await
    }

    /// Indexes defined on the active namespace.
    pub async fn list_indexes(&self) -> Result<Vec<IndexInfo>> {
        info!("list_indexes");

        let namespace = self
            .active_namespace_name()
            .ok_or_else(Error::no_active_namespace)?;

        let response = self
            .exec(ListIndexes {
                namespace: namespace.to_string(),
            })
            .await?;

        response
            .rows
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(Error::from))
            .collect()
    }

    /// Remembers a model so later operations can look it up by name.
    pub fn register_model(&mut self, model: Model) -> &mut Driver {
        info!(model = %model.name, "register_model");
        self.registry.register(model);
        self
    }

    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.registry.get(name)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Converts the value at `path` of every `model` document from type
    /// `from` to type `to`.
    ///
    /// Nothing is sent to the store unless the conversion is supported.
    pub async fn change_type(&self, model: &str, path: &str, from: &str, to: &str) -> Result<Response> {
        info!(model, path, from, to, "change_type");
        let stmt = self.translator().change_type(model, path, from, to)?;
        self.exec(stmt).await
    }

    /// Counts the documents of `model` in the active namespace that match
    /// `filter`.
    pub async fn count(&self, model: &str, filter: Option<Filter>) -> Result<u64> {
        let namespace = self
            .active_namespace_name()
            .ok_or_else(Error::no_active_namespace)?;

        let mut stmt = Select::count(namespace).filter(Filter::type_is(model));
        if let Some(filter) = filter {
            stmt = stmt.filter(filter);
        }

        let response = self.exec(stmt).await?;
        Ok(response.count().unwrap_or(0))
    }

    /// Runs caller-supplied N1QL against the active namespace.
    pub async fn run_n1ql(&self, sql: &str, params: Vec<serde_json::Value>) -> Result<Response> {
        self.exec(Raw {
            sql: sql.to_string(),
            params,
        })
        .await
    }

    pub(crate) fn translator(&self) -> Translator<'_> {
        Translator::new(self.active_namespace_name())
    }

    /// Runs a statement on the active namespace.
    pub(crate) async fn exec(&self, stmt: impl Into<Statement>) -> Result<Response> {
        self.engine.exec(self.active.as_deref(), stmt).await
    }

    /// Creates the ledger indexes, returning once both exist.
    pub(crate) async fn create_ledger_indexes(&self) -> Result<()> {
        let namespace = self.migration_namespace_name();

        for stmt in [
            ledger::index::<MigrationRecord>(namespace),
            ledger::index::<SeedRecord>(namespace),
        ] {
            self.engine.exec(Some(&*self.ledger), stmt).await?;
        }

        Ok(())
    }

    pub(crate) fn ledger_model<R: LedgerRecord>(&self) -> Model {
        let mut model = R::model();
        model.namespace = Some(self.migration_namespace_name().to_string());
        model
    }

    pub(crate) async fn add_record<R: LedgerRecord>(&self, name: &str) -> Result<R> {
        let record = R::new(name);
        let stmt = ledger::insert(self.migration_namespace_name(), &record)?;
        self.engine.exec(Some(&*self.ledger), stmt).await?;
        Ok(record)
    }

    pub(crate) async fn all_records<R: LedgerRecord>(&self) -> Result<Vec<R>> {
        let stmt = ledger::select_all::<R>(self.migration_namespace_name());
        let response = self.engine.exec(Some(&*self.ledger), stmt).await?;
        ledger::decode(response.rows)
    }

    /// Deletes every record named `name`, returning how many were deleted.
    pub(crate) async fn delete_records<R: LedgerRecord>(&self, name: &str) -> Result<u64> {
        let namespace = self.migration_namespace_name();

        let response = self
            .engine
            .exec(Some(&*self.ledger), ledger::count_named::<R>(namespace, name))
            .await?;

        let count = response.count().unwrap_or(0);
        if count == 0 {
            info!(name, model = R::MODEL, "nothing to delete");
            return Ok(0);
        }

        info!(name, model = R::MODEL, count, "deleting ledger records");
        self.engine
            .exec(Some(&*self.ledger), ledger::delete_named::<R>(namespace, name))
            .await?;

        Ok(count)
    }

    pub(crate) async fn close_impl(&mut self) -> Result<()> {
        self.active = None;
        self.provider.close().await
    }
}
