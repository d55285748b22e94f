use super::{Formatter, Params, ToSql};

/// A backtick delimited identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(&crate::escape_ident(self.0.as_ref()));
    }
}
