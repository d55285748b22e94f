use crate::{eval, lock, Bucket, Index, MemoryError, Store};

use docmigrate_core::{
    async_trait,
    driver::{Query, Response},
    stmt::{self, Returning, Statement},
    Error, Result, Transport,
};
use docmigrate_n1ql::{escape_path, Serializer};

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Handle to one in-memory namespace.
#[derive(Debug)]
pub struct Namespace {
    name: String,
    store: Arc<Mutex<Store>>,
}

impl Namespace {
    pub(crate) fn new(name: &str, store: Arc<Mutex<Store>>) -> Namespace {
        Namespace {
            name: name.to_string(),
            store,
        }
    }
}

#[async_trait]
impl Transport for Namespace {
    fn namespace(&self) -> &str {
        &self.name
    }

    async fn exec(&self, query: Query) -> Result<Response> {
        debug!(namespace = %self.name, sql = %query.sql, "exec");

        let mut store = lock(&self.store)?;

        match &query.stmt {
            Statement::CreateIndex(stmt) => create_index(store.bucket_mut(&stmt.namespace)?, stmt),
            Statement::Delete(stmt) => Ok(delete(store.bucket_mut(&stmt.namespace)?, stmt)),
            Statement::DropIndex(stmt) => drop_index(store.bucket_mut(&stmt.namespace)?, stmt),
            Statement::Insert(stmt) => insert(store.bucket_mut(&stmt.namespace)?, stmt),
            Statement::ListIndexes(stmt) => Ok(list_indexes(store.bucket(&stmt.namespace)?, stmt)),
            Statement::Raw(stmt) => Err(Error::driver(MemoryError::RawStatement(
                stmt.sql.clone(),
            ))),
            Statement::Select(stmt) => Ok(select(store.bucket(&stmt.namespace)?, stmt)),
            Statement::Update(stmt) => Ok(update(store.bucket_mut(&stmt.namespace)?, stmt)),
        }
    }
}

fn matches(doc: &Value, filter: Option<&stmt::Filter>) -> bool {
    filter.map_or(true, |filter| eval::matches(doc, filter))
}

fn create_index(bucket: &mut Bucket, stmt: &stmt::CreateIndex) -> Result<Response> {
    if bucket.indexes.iter().any(|index| index.name == stmt.name) {
        if stmt.if_not_exists {
            return Ok(Response::empty());
        }

        return Err(Error::driver(MemoryError::IndexExists {
            namespace: stmt.namespace.clone(),
            name: stmt.name.clone(),
        }));
    }

    bucket.indexes.push(Index {
        name: stmt.name.clone(),
        keys: stmt.keys.clone(),
        condition: stmt.filter.clone(),
    });

    Ok(Response::empty())
}

fn drop_index(bucket: &mut Bucket, stmt: &stmt::DropIndex) -> Result<Response> {
    let Some(position) = bucket.indexes.iter().position(|index| index.name == stmt.name) else {
        return Err(Error::driver(MemoryError::IndexNotFound {
            namespace: stmt.namespace.clone(),
            name: stmt.name.clone(),
        }));
    };

    bucket.indexes.remove(position);
    Ok(Response::empty())
}

fn list_indexes(bucket: &Bucket, stmt: &stmt::ListIndexes) -> Response {
    let serializer = Serializer::new();

    let rows = bucket
        .indexes
        .iter()
        .map(|index| {
            json!({
                "name": index.name,
                "keyspace_id": stmt.namespace,
                "index_key": index
                    .keys
                    .iter()
                    .map(|key| escape_path(&key.to_string()))
                    .collect::<Vec<_>>(),
                "condition": index.condition.as_ref().map(|filter| serializer.filter(filter)),
                "state": "online",
            })
        })
        .collect();

    Response::rows(rows)
}

fn insert(bucket: &mut Bucket, stmt: &stmt::Insert) -> Result<Response> {
    if bucket.docs.contains_key(&stmt.key) {
        return Err(Error::driver(MemoryError::DuplicateKey(stmt.key.clone())));
    }

    bucket.docs.insert(stmt.key.clone(), stmt.value.clone());
    Ok(Response::mutations(1))
}

fn select(bucket: &Bucket, stmt: &stmt::Select) -> Response {
    let mut docs: Vec<&Value> = bucket
        .docs
        .values()
        .filter(|doc| matches(doc, stmt.filter.as_ref()))
        .collect();

    match stmt.returning {
        Returning::Count => Response::rows(vec![json!({ "count": docs.len() })]),
        Returning::Document => {
            docs.sort_by(|a, b| {
                stmt.order_by
                    .iter()
                    .map(|path| eval::collate(eval::get(a, path), eval::get(b, path)))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            Response::rows(docs.into_iter().cloned().collect())
        }
    }
}

fn delete(bucket: &mut Bucket, stmt: &stmt::Delete) -> Response {
    let before = bucket.docs.len();
    bucket
        .docs
        .retain(|_, doc| !eval::matches(doc, &stmt.filter));

    Response::mutations((before - bucket.docs.len()) as u64)
}

fn update(bucket: &mut Bucket, stmt: &stmt::Update) -> Response {
    let mut count = 0;

    for doc in bucket.docs.values_mut() {
        if !matches(doc, stmt.filter.as_ref()) {
            continue;
        }

        // Assignments read the document as it was before the update
        let values: Vec<_> = stmt
            .set
            .iter()
            .map(|assignment| eval::eval(doc, &assignment.expr))
            .collect();

        for (assignment, value) in stmt.set.iter().zip(values) {
            match value {
                Some(value) => eval::set(doc, &assignment.path, value),
                None => eval::unset(doc, &assignment.path),
            }
        }

        for path in &stmt.unset {
            eval::unset(doc, path);
        }

        count += 1;
    }

    Response::mutations(count)
}
