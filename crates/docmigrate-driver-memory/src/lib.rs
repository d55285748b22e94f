//! An in-process document store.
//!
//! Namespaces hold JSON documents by key plus a list of index definitions.
//! Statements are interpreted from their tree rather than parsed from text,
//! so caller-supplied [`Raw`](docmigrate_core::stmt::Raw) statements are
//! rejected. Every read observes every completed write.

mod error;
pub use error::MemoryError;

mod eval;

mod namespace;
pub use namespace::Namespace;

use docmigrate_core::{
    async_trait,
    driver::{Capability, NamespaceOptions},
    stmt::{Filter, Path},
    ConnectionProvider, Error, Result, Transport,
};

use serde_json::Value;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::debug;

/// Connection provider over in-memory namespaces.
///
/// Clones share the same namespaces.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    store: Arc<Mutex<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    namespaces: BTreeMap<String, Bucket>,
}

#[derive(Debug, Default)]
struct Bucket {
    /// Documents by key
    docs: BTreeMap<String, Value>,

    indexes: Vec<Index>,
}

#[derive(Debug, Clone)]
struct Index {
    name: String,
    keys: Vec<Path>,
    condition: Option<Filter>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// A provider with the given namespaces already created.
    pub fn with_namespaces<I, S>(names: I) -> Memory
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let memory = Memory::new();
        if let Ok(mut store) = memory.store.lock() {
            for name in names {
                store.namespaces.insert(name.into(), Bucket::default());
            }
        }
        memory
    }

    /// Stores a document directly, bypassing statements.
    pub fn insert(&self, namespace: &str, key: impl Into<String>, doc: Value) -> Result<()> {
        let mut store = lock(&self.store)?;
        let bucket = store.bucket_mut(namespace)?;
        bucket.docs.insert(key.into(), doc);
        Ok(())
    }

    /// A snapshot of every document of a namespace, ordered by key.
    pub fn documents(&self, namespace: &str) -> Result<Vec<Value>> {
        let store = lock(&self.store)?;
        Ok(store.bucket(namespace)?.docs.values().cloned().collect())
    }

    fn transport(&self, name: &str) -> Arc<dyn Transport> {
        Arc::new(Namespace::new(name, self.store.clone()))
    }
}

#[async_trait]
impl ConnectionProvider for Memory {
    fn capability(&self) -> &Capability {
        &Capability::N1QL
    }

    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn Transport>> {
        lock(&self.store)?.bucket(name)?;
        Ok(self.transport(name))
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        Ok(lock(&self.store)?.namespaces.keys().cloned().collect())
    }

    async fn create_namespace(
        &self,
        name: &str,
        options: &NamespaceOptions,
    ) -> Result<Arc<dyn Transport>> {
        debug!(namespace = name, ?options, "creating namespace");

        let mut store = lock(&self.store)?;
        if store.namespaces.contains_key(name) {
            return Err(Error::driver(MemoryError::NamespaceExists(name.to_string())));
        }

        store.namespaces.insert(name.to_string(), Bucket::default());
        Ok(self.transport(name))
    }

    async fn drop_namespace(&self, name: &str) -> Result<()> {
        match lock(&self.store)?.namespaces.remove(name) {
            Some(_) => Ok(()),
            None => Err(Error::driver(MemoryError::NamespaceNotFound(
                name.to_string(),
            ))),
        }
    }
}

impl Store {
    fn bucket(&self, name: &str) -> Result<&Bucket> {
        self.namespaces
            .get(name)
            .ok_or_else(|| Error::driver(MemoryError::NamespaceNotFound(name.to_string())))
    }

    fn bucket_mut(&mut self, name: &str) -> Result<&mut Bucket> {
        self.namespaces
            .get_mut(name)
            .ok_or_else(|| Error::driver(MemoryError::NamespaceNotFound(name.to_string())))
    }
}

fn lock(store: &Mutex<Store>) -> Result<MutexGuard<'_, Store>> {
    store
        .lock()
        .map_err(|_| Error::driver(MemoryError::Poisoned))
}
