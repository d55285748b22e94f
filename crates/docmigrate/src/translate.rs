//! Relational schema changes expressed as document store statements.
//!
//! Every statement built here is scoped to a single model through the type
//! discriminator. Arguments are validated before anything is built, so a
//! failed translation never reaches the store.

use docmigrate_core::{
    schema::conversion,
    stmt::{CreateIndex, DropIndex, Expr, Filter, Path, Statement, Update},
    Error, Result,
};

/// Builds statements for the namespace currently targeted by DDL.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    namespace: Option<&'a str>,
}

/// The columns of an index: one column name or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl<'a> Translator<'a> {
    pub fn new(namespace: Option<&'a str>) -> Translator<'a> {
        Translator { namespace }
    }

    /// Sets `path` to null on every document of `model`.
    ///
    /// Null is the only default written; types that cannot hold null are not
    /// handled.
    pub fn add_field(&self, model: &str, path: &str) -> Result<Statement> {
        validate_model(model)?;
        validate_path(path)?;

        let stmt = Update::new(self.namespace()?)
            .set(path, Expr::Null)
            .filter(Filter::type_is(model));

        Ok(stmt.into())
    }

    /// Removes `path` from every document of `model`.
    pub fn remove_field(&self, model: &str, path: &str) -> Result<Statement> {
        validate_model(model)?;
        validate_path(path)?;

        let stmt = Update::new(self.namespace()?)
            .unset(path)
            .filter(Filter::type_is(model));

        Ok(stmt.into())
    }

    /// Moves the value at `from` to `to` in a single statement.
    ///
    /// Indexes defined over `from` are left untouched and keep pointing at the
    /// old path.
    pub fn rename_field(&self, model: &str, from: &str, to: &str) -> Result<Statement> {
        validate_model(model)?;
        validate_path(from)?;
        validate_path(to)?;

        // The UNSET runs after the SET and would remove the value just written
        let (old, new) = (Path::parse(from), Path::parse(to));
        if old.starts_with(&new) || new.starts_with(&old) {
            return Err(Error::validation(format!(
                "cannot rename `{from}` to `{to}`: the paths overlap"
            )));
        }

        let stmt = Update::new(self.namespace()?)
            .set(new, Expr::path(old.clone()))
            .unset(old)
            .filter(Filter::type_is(model));

        Ok(stmt.into())
    }

    /// Casts the value at `path` from type `from` to type `to`.
    pub fn change_type(&self, model: &str, path: &str, from: &str, to: &str) -> Result<Statement> {
        if [model, path, from, to].iter().any(|arg| arg.is_empty()) {
            return Err(Error::validation("Missing required argument"));
        }

        let conversion = conversion::resolve(from, to)?;
        let path = Path::parse(path);

        let stmt = Update::new(self.namespace()?)
            .set(path.clone(), Expr::convert(conversion, path))
            .filter(Filter::type_is(model));

        Ok(stmt.into())
    }

    /// A partial index over `columns`, restricted to documents of `model`.
    pub fn add_index(&self, model: &str, name: &str, columns: Columns) -> Result<Statement> {
        validate_model(model)?;
        validate_index_name(name)?;

        if columns.0.is_empty() {
            return Err(Error::validation("index requires at least one column"));
        }

        let keys = columns
            .0
            .iter()
            .map(|column| {
                let key = Path::parse(column);
                if key.is_blank() {
                    return Err(Error::validation(format!(
                        "malformed index column `{column}`"
                    )));
                }
                Ok(key)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateIndex {
            name: name.to_string(),
            namespace: self.namespace()?.to_string(),
            keys,
            filter: Some(Filter::type_is(model)),
            if_not_exists: false,
        }
        .into())
    }

    pub fn remove_index(&self, name: &str) -> Result<Statement> {
        validate_index_name(name)?;

        Ok(DropIndex {
            namespace: self.namespace()?.to_string(),
            name: name.to_string(),
        }
        .into())
    }

    fn namespace(&self) -> Result<&'a str> {
        self.namespace.ok_or_else(Error::no_active_namespace)
    }
}

fn validate_model(model: &str) -> Result<()> {
    if model.is_empty() {
        return Err(Error::validation("missing model name"));
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<()> {
    if Path::parse(path).is_blank() {
        return Err(Error::validation("missing model path"));
    }
    Ok(())
}

fn validate_index_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation("missing index name"));
    }
    Ok(())
}

impl Columns {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Columns {
    fn from(value: &str) -> Self {
        Columns(vec![value.to_string()])
    }
}

impl From<String> for Columns {
    fn from(value: String) -> Self {
        Columns(vec![value])
    }
}

impl From<Vec<String>> for Columns {
    fn from(value: Vec<String>) -> Self {
        Columns(value)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(value: Vec<&str>) -> Self {
        value.as_slice().into()
    }
}

impl From<&[&str]> for Columns {
    fn from(value: &[&str]) -> Self {
        Columns(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(value: [&str; N]) -> Self {
        value.as_slice().into()
    }
}
