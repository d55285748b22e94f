use docmigrate_core::{
    async_trait,
    driver::{Capability, NamespaceOptions, Query, Response},
    ConnectionProvider, Result, Transport,
};

use std::sync::{Arc, Mutex};

/// A call that reached the store.
#[derive(Debug, Clone)]
pub enum DriverOp {
    OpenNamespace(String),
    ListNamespaces,
    CreateNamespace(String),
    DropNamespace(String),

    /// A statement executed on a namespace. `response` is `None` when the
    /// store returned an error.
    Exec {
        namespace: String,
        query: Query,
        response: Option<Response>,
    },
}

/// A provider wrapper that logs every call for testing purposes
#[derive(Debug)]
pub struct LoggingProvider {
    inner: Box<dyn ConnectionProvider>,

    /// Log of all operations executed through this provider
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[derive(Debug)]
pub struct LoggingTransport {
    inner: Arc<dyn Transport>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingProvider {
    pub fn new(provider: impl ConnectionProvider) -> Self {
        Self {
            inner: Box::new(provider),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }

    fn log(&self, op: DriverOp) {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);
    }

    fn wrap(&self, inner: Arc<dyn Transport>) -> Arc<dyn Transport> {
        Arc::new(LoggingTransport {
            inner,
            ops_log: self.ops_log_handle(),
        })
    }
}

#[async_trait]
impl ConnectionProvider for LoggingProvider {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn Transport>> {
        self.log(DriverOp::OpenNamespace(name.to_string()));
        Ok(self.wrap(self.inner.open_namespace(name).await?))
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.log(DriverOp::ListNamespaces);
        self.inner.list_namespaces().await
    }

    async fn create_namespace(
        &self,
        name: &str,
        options: &NamespaceOptions,
    ) -> Result<Arc<dyn Transport>> {
        self.log(DriverOp::CreateNamespace(name.to_string()));
        Ok(self.wrap(self.inner.create_namespace(name, options).await?))
    }

    async fn drop_namespace(&self, name: &str) -> Result<()> {
        self.log(DriverOp::DropNamespace(name.to_string()));
        self.inner.drop_namespace(name).await
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    fn namespace(&self) -> &str {
        self.inner.namespace()
    }

    async fn exec(&self, query: Query) -> Result<Response> {
        let logged = query.clone();
        let result = self.inner.exec(query).await;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp::Exec {
                namespace: self.namespace().to_string(),
                query: logged,
                response: result.as_ref().ok().cloned(),
            });

        result
    }
}
