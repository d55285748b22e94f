mod capability;
pub use capability::Capability;

mod namespace_options;
pub use namespace_options::NamespaceOptions;

pub mod operation;
pub use operation::Operation;

mod query;
pub use query::{Consistency, Query};

mod response;
pub use response::{Meta, Response};

use crate::async_trait;

use std::{fmt::Debug, sync::Arc};

/// Opens, lists, creates and drops namespaces on a document store.
///
/// Connection and session lifecycle belong to the implementation; the
/// migration driver only ever sees namespace handles.
#[async_trait]
pub trait ConnectionProvider: Debug + Send + Sync + 'static {
    /// Describes what the store can do.
    fn capability(&self) -> &Capability;

    /// Opens an existing namespace. Fails if it does not exist or cannot be
    /// reached.
    async fn open_namespace(&self, name: &str) -> crate::Result<Arc<dyn Transport>>;

    async fn list_namespaces(&self) -> crate::Result<Vec<String>>;

    /// Creates a namespace and returns an open handle to it.
    async fn create_namespace(
        &self,
        name: &str,
        options: &NamespaceOptions,
    ) -> crate::Result<Arc<dyn Transport>>;

    async fn drop_namespace(&self, name: &str) -> crate::Result<()>;

    /// Releases any resources held by the provider. The default does nothing.
    async fn close(&self) -> crate::Result<()> {
        Ok(())
    }
}

/// An open namespace statements can be executed against.
#[async_trait]
pub trait Transport: Debug + Send + Sync + 'static {
    /// Name of the namespace this handle targets.
    fn namespace(&self) -> &str;

    /// Execute a statement.
    ///
    /// Cancellation and timeouts are the transport's responsibility.
    async fn exec(&self, query: Query) -> crate::Result<Response>;
}
