use crate::{Config, Driver, Engine};

use docmigrate_core::{ConnectionProvider, Error, Result};

use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Replaces the whole configuration.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Namespace holding the migration ledger.
    pub fn migration_namespace(&mut self, name: impl Into<String>) -> &mut Self {
        self.config.migration_bucket = Some(name.into());
        self
    }

    /// Namespace made active once the driver is built.
    pub fn namespace(&mut self, name: impl Into<String>) -> &mut Self {
        self.config.bucket = Some(name.into());
        self
    }

    pub fn dry_run(&mut self, dry_run: bool) -> &mut Self {
        self.config.dry_run = dry_run;
        self
    }

    /// Builds a driver on top of `provider`.
    ///
    /// Opens the migration namespace and makes it active, creates the ledger
    /// indexes and returns only once they exist. When a namespace is
    /// configured, it becomes the active one last.
    pub async fn build(&mut self, provider: impl ConnectionProvider) -> Result<Driver> {
        self.config.validate()?;

        let cluster = self.config.cluster_url()?;
        info!(
            %cluster,
            user = %self.config.user,
            dry_run = self.config.dry_run,
            "connecting"
        );

        let migration_namespace = self.config.migration_namespace()?;
        let ledger = provider
            .open_namespace(migration_namespace)
            .await
            .map_err(|err| Error::namespace(migration_namespace, "open", err))?;

        let mut driver = Driver::new(Arc::new(provider), ledger, Engine::new(self.config.dry_run));
        driver.create_ledger_indexes().await?;

        if let Some(name) = &self.config.bucket {
            driver.switch_namespace(name).await?;
        }

        Ok(driver)
    }
}
