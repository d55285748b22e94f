use super::{Formatter, Literal, ToSql};

pub trait Params {
    fn push(&mut self, param: &serde_json::Value) -> Placeholder;
}

/// A positional parameter, `$1` for the first one.
pub struct Placeholder(pub usize);

impl Params for Vec<serde_json::Value> {
    fn push(&mut self, value: &serde_json::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('$');
        f.dst.push_str(&self.0.to_string());
    }
}

/// A bound value: a placeholder, or the value itself when the formatter
/// is writing literals.
pub(super) struct Bind<'a>(pub(super) &'a serde_json::Value);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.literals {
            Literal(self.0).to_sql(f);
        } else {
            let placeholder = f.params.push(self.0);
            placeholder.to_sql(f);
        }
    }
}
