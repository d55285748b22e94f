use docmigrate::{Config, Driver};
use docmigrate_driver_memory::Memory;
use pretty_assertions::assert_eq;
use tests::{init_tracing, DriverOp, ExecLog, LoggingProvider, DEFAULT, MIGRATIONS};

fn provider() -> (LoggingProvider, ExecLog) {
    init_tracing();
    let provider = LoggingProvider::new(Memory::with_namespaces([MIGRATIONS, DEFAULT]));
    let log = ExecLog::new(provider.ops_log_handle());
    (provider, log)
}

#[tokio::test]
async fn build_creates_ledger_indexes_before_switching() {
    let (provider, mut log) = provider();

    let driver = Driver::builder()
        .migration_namespace(MIGRATIONS)
        .namespace(DEFAULT)
        .build(provider)
        .await
        .unwrap();

    assert_eq!(driver.active_namespace_name(), Some(DEFAULT));

    assert!(matches!(log.pop(), Some(DriverOp::OpenNamespace(name)) if name == MIGRATIONS));
    assert_eq!(
        log.statements(),
        [
            "CREATE INDEX `ledger_MigrationRun` IF NOT EXISTS ON `migrations`(`name`, `run_on`) \
             WHERE `_type` = 'MigrationRun'",
            "CREATE INDEX `ledger_MigrationSeed` IF NOT EXISTS ON `migrations`(`name`, `run_on`) \
             WHERE `_type` = 'MigrationSeed'",
        ]
    );
    assert!(matches!(
        log.last(),
        Some(DriverOp::OpenNamespace(name)) if name == DEFAULT
    ));
}

#[tokio::test]
async fn build_twice_reuses_ledger_indexes() {
    let memory = Memory::with_namespaces([MIGRATIONS]);

    for _ in 0..2 {
        Driver::builder()
            .migration_namespace(MIGRATIONS)
            .build(memory.clone())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn without_namespace_the_migration_namespace_is_active() {
    let (provider, _log) = provider();

    let driver = Driver::builder()
        .migration_namespace(MIGRATIONS)
        .build(provider)
        .await
        .unwrap();

    assert_eq!(driver.active_namespace_name(), Some(MIGRATIONS));
}

#[tokio::test]
async fn migration_namespace_is_required() {
    let (provider, log) = provider();

    let err = Driver::builder().build(provider).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Configuration must specify migrationBucket");
    assert!(log.is_empty());
}

#[tokio::test]
async fn sql_file_is_rejected() {
    let (provider, log) = provider();

    let config: Config = serde_json::from_value(serde_json::json!({
        "migrationBucket": MIGRATIONS,
        "sql-file": "schema.sql",
    }))
    .unwrap();

    let err = Driver::builder().config(config).build(provider).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "This driver does not support the --sql-file option."
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn missing_migration_namespace_in_store() {
    let provider = LoggingProvider::new(Memory::new());

    let err = Driver::builder()
        .migration_namespace(MIGRATIONS)
        .build(provider)
        .await
        .unwrap_err();

    assert!(err.is_namespace());
}

#[tokio::test]
async fn config_from_framework_block() {
    let (provider, _log) = provider();

    let config: Config = serde_json::from_value(serde_json::json!({
        "host": "couchbase://db.internal",
        "user": "migrator",
        "password": "secret",
        "migrationBucket": MIGRATIONS,
        "bucket": DEFAULT,
        "dryRun": false,
        "migrationTable": "schema_migrations",
    }))
    .unwrap();

    let driver = Driver::builder().config(config).build(provider).await.unwrap();

    assert_eq!(driver.migration_namespace_name(), MIGRATIONS);
    assert_eq!(driver.active_namespace_name(), Some(DEFAULT));
}
