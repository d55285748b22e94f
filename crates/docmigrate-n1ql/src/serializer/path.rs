use super::{Ident, Params, Period, ToSql};

use docmigrate_core::stmt;

impl ToSql for &stmt::Path {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let parts = Period(self.segments().iter().map(Ident));
        fmt!(f, parts);
    }
}
