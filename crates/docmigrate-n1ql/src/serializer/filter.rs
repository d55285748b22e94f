use super::{params::Bind, Delimited, Ident, Literal, Params, ToSql};

use docmigrate_core::{
    stmt::{self, Filter},
    TYPE_DISCRIMINATOR,
};

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Filter::TypeIs(model) => {
                // Always inline so the predicate can be used by index definitions
                let model = serde_json::Value::String(model.clone());
                fmt!(f, Ident(TYPE_DISCRIMINATOR) " = " Literal(&model));
            }
            Filter::Eq(path, value) => fmt!(f, path " = " Bind(value)),
            Filter::IsMissing(path) => fmt!(f, path " IS MISSING"),
            Filter::IsNotMissing(path) => fmt!(f, path " IS NOT MISSING"),
            Filter::And(operands) => fmt!(f, Delimited(operands, " AND ")),
        }
    }
}

/// ` WHERE <filter>`, or nothing.
pub(super) struct Where<'a>(pub(super) Option<&'a Filter>);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let Some(filter) = self.0 {
            fmt!(f, " WHERE " filter);
        }
    }
}
