use docmigrate::{
    Capability, ColumnSpec, ConnectionProvider, Driver, Migrate, NamespaceOptions, Result,
    Transport, UNSUPPORTED,
};
use docmigrate_core::async_trait;
use docmigrate_driver_memory::Memory;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::{init_tracing, setup, DEFAULT, MIGRATIONS};

/// A store claiming it can do everything.
#[derive(Debug)]
struct Permissive(Memory);

const EVERYTHING: Capability = Capability {
    rename_model: true,
    drop_model: true,
    insert_rows: true,
    alter_column: true,
    foreign_keys: true,
    rename_namespace: true,
};

#[async_trait]
impl ConnectionProvider for Permissive {
    fn capability(&self) -> &Capability {
        &EVERYTHING
    }

    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn Transport>> {
        self.0.open_namespace(name).await
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.0.list_namespaces().await
    }

    async fn create_namespace(
        &self,
        name: &str,
        options: &NamespaceOptions,
    ) -> Result<Arc<dyn Transport>> {
        self.0.create_namespace(name, options).await
    }

    async fn drop_namespace(&self, name: &str) -> Result<()> {
        self.0.drop_namespace(name).await
    }
}

#[tokio::test]
async fn unsupported_operations_fail_without_touching_the_store() {
    let t = setup().await;
    let spec = ColumnSpec::new("string");

    let results = [
        ("dropTable", t.driver.drop_table("Test").await),
        ("renameTable", t.driver.rename_table("Test", "Renamed").await),
        ("changeColumn", t.driver.change_column("Test", "name", &spec).await),
        (
            "insert",
            t.driver
                .insert("Test", &["name".to_string()], &["value".into()])
                .await,
        ),
        (
            "addForeignKey",
            t.driver.add_foreign_key("Test", "Other", "fk_other").await,
        ),
        (
            "removeForeignKey",
            t.driver.remove_foreign_key("Test", "fk_other").await,
        ),
        (
            "renameCollection",
            t.driver.rename_collection("default", "other").await,
        ),
    ];

    for (name, result) in results {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), UNSUPPORTED, "{name}");
        assert!(err.is_unsupported_operation());
        assert_eq!(err.unsupported_operation_name(), Some(name));
    }

    assert!(t.log.is_empty());
}

#[tokio::test]
async fn supports_reports_capabilities() {
    let t = setup().await;

    for name in [
        "renameTable",
        "dropTable",
        "changeColumn",
        "insert",
        "addForeignKey",
        "removeForeignKey",
        "renameCollection",
        "startTransaction",
        "notAnOperation",
    ] {
        assert!(!t.driver.supports(name), "{name}");
    }

    for name in [
        "createTable",
        "addColumn",
        "removeColumn",
        "renameColumn",
        "addIndex",
        "removeIndex",
        "runN1ql",
        "createCollection",
        "dropCollection",
        "addMigrationRecord",
        "deleteSeed",
    ] {
        assert!(t.driver.supports(name), "{name}");
    }
}

#[tokio::test]
async fn supports_agrees_with_operations_whatever_the_capability() {
    init_tracing();

    let memory = Memory::with_namespaces([MIGRATIONS, DEFAULT]);
    let mut builder = Driver::builder();
    builder.migration_namespace(MIGRATIONS).namespace(DEFAULT);
    let driver = builder.build(Permissive(memory)).await.unwrap();

    assert!(driver.capability().supports(docmigrate_core::driver::Operation::RenameTable));

    let err = driver.rename_table("Test", "Renamed").await.unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(!driver.supports("renameTable"));

    let err = driver.drop_table("Test").await.unwrap_err();
    assert!(err.is_unsupported_operation());
    assert!(!driver.supports("dropTable"));

    for name in ["changeColumn", "insert", "addForeignKey", "removeForeignKey", "renameCollection"] {
        assert!(!driver.supports(name), "{name}");
    }

    assert!(driver.supports("renameColumn"));
}
