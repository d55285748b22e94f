use super::{params::Bind, Params, ToSql};

use docmigrate_core::stmt::{self, Expr};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Expr::Null => fmt!(f, "NULL"),
            Expr::Path(path) => fmt!(f, path),
            Expr::Convert(conversion, path) => {
                fmt!(f, conversion.function_name() "(" path ")")
            }
            Expr::Value(value) => fmt!(f, Bind(value)),
        }
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let path = &self.path;
        let expr = &self.expr;
        fmt!(f, path " = " expr);
    }
}
