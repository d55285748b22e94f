pub use exec_log::ExecLog;

mod logging_provider;
pub use logging_provider::{DriverOp, LoggingProvider, LoggingTransport};

use docmigrate::{Driver, Migrate};
use docmigrate_driver_memory::Memory;

/// Namespace holding the ledger in tests.
pub const MIGRATIONS: &str = "migrations";

/// Namespace made active by [`setup`].
pub const DEFAULT: &str = "default";

/// A driver over a fresh in-memory store, spied on by an [`ExecLog`].
pub struct Test {
    pub driver: Driver,
    pub log: ExecLog,
    pub memory: Memory,
}

/// Installs a subscriber printing through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Builds a driver with `migrations` as the migration namespace and
/// `default` active. The log starts empty.
pub async fn setup() -> Test {
    setup_with(|_| {}).await
}

/// Like [`setup`], letting the caller adjust the builder.
pub async fn setup_with(f: impl FnOnce(&mut docmigrate::Builder)) -> Test {
    init_tracing();

    let memory = Memory::with_namespaces([MIGRATIONS, DEFAULT]);
    let provider = LoggingProvider::new(memory.clone());
    let mut log = ExecLog::new(provider.ops_log_handle());

    let mut builder = Driver::builder();
    builder.migration_namespace(MIGRATIONS).namespace(DEFAULT);
    f(&mut builder);

    let driver = builder.build(provider).await.unwrap();
    log.clear();

    Test {
        driver,
        log,
        memory,
    }
}

impl Test {
    /// Stores a document of `model` in the active namespace.
    pub fn insert(&self, key: &str, model: &str, mut doc: serde_json::Value) {
        doc["_type"] = model.into();
        self.memory.insert(DEFAULT, key, doc).unwrap();
    }

    /// Creates model `Test` with `{ name: string, renameMe: string }` and
    /// one document.
    pub async fn seed_test_model(&mut self) {
        let schema = serde_json::from_value(serde_json::json!({
            "name": { "type": "string" },
            "renameMe": { "type": "string" },
        }))
        .unwrap();

        self.driver.create_table("Test", schema).await.unwrap();
        self.insert(
            "Test|1",
            "Test",
            serde_json::json!({ "name": "first", "renameMe": "value" }),
        );
    }

    /// Counts `model` documents in the active namespace with `path` present.
    pub fn count_present(&self, model: &str, path: &str) -> u64 {
        self.memory
            .documents(DEFAULT)
            .unwrap()
            .iter()
            .filter(|doc| doc["_type"] == model)
            .filter(|doc| lookup(doc, path).is_some())
            .count() as u64
    }
}

fn lookup<'a>(doc: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    path.split('.')
        .try_fold(doc, |value, segment| value.as_object()?.get(segment))
}
