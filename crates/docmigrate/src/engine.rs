use docmigrate_core::{
    driver::{Consistency, Response},
    stmt::Statement,
    Error, Result, Transport,
};
use docmigrate_n1ql::Serializer;

use tracing::{debug, error, info};

/// Runs statements against a namespace.
///
/// Failures are never retried: a bulk update that failed halfway is not safe
/// to replay blindly.
#[derive(Debug, Clone)]
pub(crate) struct Engine {
    serializer: Serializer,

    /// When set, statements are logged and never sent.
    dry_run: bool,
}

/// Every statement waits for the indexes to catch up with prior mutations.
/// Updates and deletes scan an index too, so a bounded scan could skip
/// documents written just before.
const CONSISTENCY: Consistency = Consistency::RequestPlus;

impl Engine {
    pub(crate) fn new(dry_run: bool) -> Engine {
        Engine {
            serializer: Serializer::new(),
            dry_run,
        }
    }

    pub(crate) fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub(crate) async fn exec(
        &self,
        transport: Option<&dyn Transport>,
        stmt: impl Into<Statement>,
    ) -> Result<Response> {
        let Some(transport) = transport else {
            return Err(Error::no_active_namespace());
        };

        let query = self.serializer.query(stmt.into(), CONSISTENCY);

        if self.dry_run {
            info!(statement = %query.sql, params = ?query.params, "DRY RUN");
            return Ok(Response::empty());
        }

        info!(namespace = transport.namespace(), statement = %query.sql, "executing");
        let statement = query.sql.clone();

        match transport.exec(query).await {
            Ok(response) => {
                debug!(
                    mutations = response.meta.mutation_count,
                    results = response.meta.result_count,
                    "statement complete"
                );
                Ok(response)
            }
            Err(err) => {
                error!(%statement, error = %err, "statement failed");
                Err(Error::query(statement, err))
            }
        }
    }
}
