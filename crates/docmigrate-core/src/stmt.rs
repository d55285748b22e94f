mod create_index;
pub use create_index::CreateIndex;

mod delete;
pub use delete::Delete;

mod drop_index;
pub use drop_index::DropIndex;

mod expr;
pub use expr::{Conversion, Expr};

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod list_indexes;
pub use list_indexes::ListIndexes;

mod path;
pub use path::Path;

mod raw;
pub use raw::Raw;

mod select;
pub use select::{Returning, Select};

mod update;
pub use update::{Assignment, Update};

pub use serde_json::Value;

/// A statement addressed to the document store.
///
/// Every variant except [`Raw`] is built by this workspace and is therefore
/// known to be well formed; drivers may interpret the tree directly or run
/// the serialized text.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateIndex(CreateIndex),
    Delete(Delete),
    DropIndex(DropIndex),
    Insert(Insert),
    ListIndexes(ListIndexes),
    Raw(Raw),
    Select(Select),
    Update(Update),
}
