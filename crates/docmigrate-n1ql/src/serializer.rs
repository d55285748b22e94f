#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod filter;
mod path;
mod statement;

use docmigrate_core::{
    driver::{Consistency, Query},
    stmt::{self, Statement},
};

/// Serialize a statement to N1QL text
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized N1QL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// When true, values are written inline instead of as placeholders.
    /// Index definitions cannot reference parameters.
    literals: bool,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer { _priv: () }
    }

    /// Serializes `stmt`, pushing every bound value onto `params`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
            literals: false,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Serializes `stmt` into a [`Query`] ready for a transport.
    pub fn query(&self, stmt: Statement, consistency: Consistency) -> Query {
        let mut params = vec![];
        let sql = self.serialize(&stmt, &mut params);

        Query {
            stmt,
            sql,
            params,
            consistency,
        }
    }

    /// Serializes a predicate with its values written inline, the way the
    /// index catalog reports index conditions.
    pub fn filter(&self, filter: &stmt::Filter) -> String {
        let mut ret = String::new();
        let mut params = NoParams;

        let mut fmt = Formatter {
            dst: &mut ret,
            params: &mut params,
            literals: true,
        };

        filter.to_sql(&mut fmt);
        ret
    }

    /// Serializes a single document path.
    pub fn path(&self, path: &stmt::Path) -> String {
        let mut ret = String::new();
        let mut params = NoParams;

        let mut fmt = Formatter {
            dst: &mut ret,
            params: &mut params,
            literals: true,
        };

        path.to_sql(&mut fmt);
        ret
    }
}

/// Used where no placeholder can be produced.
struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &serde_json::Value) -> Placeholder {
        Placeholder(0)
    }
}

impl<T> Formatter<'_, T> {
    /// Runs `f` with values written inline.
    fn with_literals(&mut self, f: impl FnOnce(&mut Self)) {
        let prev = std::mem::replace(&mut self.literals, true);
        f(self);
        self.literals = prev;
    }
}
