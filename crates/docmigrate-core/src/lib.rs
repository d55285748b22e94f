#[macro_use]
mod macros;

pub mod driver;
pub use driver::{ConnectionProvider, Transport};

mod error;
pub use error::{Error, IntoError, UNSUPPORTED};

pub mod schema;
pub use schema::{FieldType, Model};

pub mod stmt;
pub use stmt::Statement;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;

/// Document field holding the name of the model a document belongs to.
///
/// Every generated statement filters on this field; it is the only thing
/// separating "tables" inside a namespace.
pub const TYPE_DISCRIMINATOR: &str = "_type";
