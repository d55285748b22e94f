pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

use docmigrate_core::stmt::Path;

/// Escapes a dotted path so that every segment is a delimited identifier.
///
/// `a.b.c` becomes `` `a`.`b`.`c` ``. Backticks inside a segment are doubled,
/// so reserved words and odd characters are always safe to splice into a
/// statement.
pub fn escape_path(path: &str) -> String {
    Serializer::new().path(&Path::parse(path))
}

/// Escapes a single identifier, such as a namespace or index name.
pub fn escape_ident(ident: &str) -> String {
    let mut ret = String::with_capacity(ident.len() + 2);
    ret.push('`');
    for c in ident.chars() {
        if c == '`' {
            ret.push('`');
        }
        ret.push(c);
    }
    ret.push('`');
    ret
}
