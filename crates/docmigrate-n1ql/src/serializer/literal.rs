use super::{Formatter, Params, ToSql};

/// A value written inline.
///
/// Strings are single quoted with backslash escapes; every other JSON value
/// is already valid N1QL and is written as JSON.
pub(super) struct Literal<'a>(pub(super) &'a serde_json::Value);

impl ToSql for Literal<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self.0 {
            serde_json::Value::String(s) => {
                f.dst.push('\'');
                for c in s.chars() {
                    match c {
                        '\\' => f.dst.push_str("\\\\"),
                        '\'' => f.dst.push_str("\\'"),
                        c => f.dst.push(c),
                    }
                }
                f.dst.push('\'');
            }
            value => f.dst.push_str(&value.to_string()),
        }
    }
}
