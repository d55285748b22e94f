use docmigrate_core::{Error, Result};

use tracing::warn;
use url::Url;

const DEFAULT_HOST: &str = "couchbase://localhost";
const DEFAULT_PORT: u16 = 8091;
const DEFAULT_USER: &str = "admin";

/// Environment variable overriding the default cluster host.
pub const HOST_ENV: &str = "COUCHBASE_HOST";

const MIGRATION_TABLE: &str = "migrations";
const SEED_TABLE: &str = "seeds";

/// Driver configuration, as found in a migration framework's database
/// configuration block.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub host: String,

    pub port: u16,

    pub user: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Namespace holding the migration and seed ledger. Required.
    pub migration_bucket: Option<String>,

    /// Namespace made active once the driver is built.
    pub bucket: Option<String>,

    /// Log statements instead of executing them.
    pub dry_run: bool,

    /// Not supported; building fails when set.
    #[serde(alias = "sql-file")]
    pub sql_file: Option<String>,

    /// Ledger records are always stored as `MigrationRun` documents; any other
    /// value is replaced with a warning.
    pub migration_table: Option<String>,

    /// Seed records are always stored as `MigrationSeed` documents; any other
    /// value is replaced with a warning.
    pub seed_table: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: std::env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: None,
            migration_bucket: None,
            bucket: None,
            dry_run: false,
            sql_file: None,
            migration_table: None,
            seed_table: None,
        }
    }
}

impl Config {
    /// Checks the configuration, correcting the options the driver ignores.
    pub fn validate(&mut self) -> Result<()> {
        if self.sql_file.is_some() {
            return Err(Error::validation(
                "This driver does not support the --sql-file option.",
            ));
        }

        if let Some(table) = &self.migration_table {
            if table != MIGRATION_TABLE {
                warn!(
                    table,
                    "ignoring migration table option; migrations are stored as MigrationRun"
                );
                self.migration_table = Some(MIGRATION_TABLE.to_string());
            }
        }

        if let Some(table) = &self.seed_table {
            if table != SEED_TABLE {
                warn!(
                    table,
                    "ignoring seed table option; seeds are stored as MigrationSeed"
                );
                self.seed_table = Some(SEED_TABLE.to_string());
            }
        }

        match &self.migration_bucket {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(Error::validation(
                "Configuration must specify migrationBucket",
            )),
        }
    }

    /// The cluster connection string, `<host>:<port>?detailed_errcodes=1`.
    pub fn cluster_url(&self) -> Result<Url> {
        let url = format!("{}:{}?detailed_errcodes=1", self.host, self.port);
        Url::parse(&url)
            .map_err(|err| Error::validation(format!("invalid cluster url `{url}`: {err}")))
    }

    pub(crate) fn migration_namespace(&self) -> Result<&str> {
        match self.migration_bucket.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(Error::validation(
                "Configuration must specify migrationBucket",
            )),
        }
    }
}
