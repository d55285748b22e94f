use super::Operation;

/// Which relational operations a document store can express.
///
/// Operations whose flag is `false` are answered with the unsupported
/// operation error without contacting the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    /// Renaming a model, which would orphan the indexes defined on it.
    pub rename_model: bool,

    /// Dropping a model.
    pub drop_model: bool,

    /// Inserting a row given as parallel column and value arrays.
    pub insert_rows: bool,

    /// Changing a column definition in place.
    pub alter_column: bool,

    pub foreign_keys: bool,

    /// Renaming a whole namespace.
    pub rename_namespace: bool,
}

impl Capability {
    /// N1QL document store capabilities.
    pub const N1QL: Self = Self {
        rename_model: false,
        drop_model: false,
        insert_rows: false,
        alter_column: false,
        foreign_keys: false,
        rename_namespace: false,
    };

    /// Returns `true` if `operation` can be carried out on this store.
    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::RenameTable => self.rename_model,
            Operation::DropTable => self.drop_model,
            Operation::Insert => self.insert_rows,
            Operation::ChangeColumn => self.alter_column,
            Operation::AddForeignKey | Operation::RemoveForeignKey => self.foreign_keys,
            Operation::RenameCollection => self.rename_namespace,
            _ => true,
        }
    }
}
