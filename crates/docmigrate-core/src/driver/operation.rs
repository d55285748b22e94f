//! Names of the operations a migration framework can ask a driver for.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Models and fields
    CreateTable,
    DropTable,
    RenameTable,
    AddColumn,
    RemoveColumn,
    RenameColumn,
    ChangeColumn,
    ChangeType,
    Insert,

    // Indexes and keys
    AddIndex,
    RemoveIndex,
    ListIndexes,
    AddForeignKey,
    RemoveForeignKey,

    // Namespaces
    CreateCollection,
    DropCollection,
    RenameCollection,
    CreateNamespace,
    DropNamespace,
    WithNamespace,
    ListNamespaces,

    // Registry
    RegisterModel,
    GetModel,

    // Raw statements
    RunSql,
    RunN1ql,
    All,

    // Ledger
    AddMigrationRecord,
    AllLoadedMigrations,
    DeleteMigration,
    AddSeedRecord,
    AllLoadedSeeds,
    DeleteSeed,

    // Lifecycle
    StartMigration,
    EndMigration,
    MapDataType,
    Close,
}

impl Operation {
    /// Parses an operation name.
    ///
    /// Accepts the framework's camelCase names, the bucket and model aliases
    /// used by older callers (`createBucket`, `addOttomanPath`, ...) and the
    /// snake_case names of the Rust API.
    pub fn from_name(name: &str) -> Option<Operation> {
        use Operation::*;

        Some(match name {
            "createTable" | "create_table" | "createOttomanModel" => CreateTable,
            "dropTable" | "drop_table" | "dropOttomanModel" => DropTable,
            "renameTable" | "rename_table" | "renameOttomanModel" => RenameTable,
            "addColumn" | "add_column" | "addOttomanPath" => AddColumn,
            "removeColumn" | "remove_column" | "removeOttomanPath" => RemoveColumn,
            "renameColumn" | "rename_column" | "renameOttomanPath" => RenameColumn,
            "changeColumn" | "change_column" => ChangeColumn,
            "changeType" | "change_type" => ChangeType,
            "insert" => Insert,
            "addIndex" | "add_index" => AddIndex,
            "removeIndex" | "remove_index" => RemoveIndex,
            "getIndexes" | "list_indexes" => ListIndexes,
            "addForeignKey" | "add_foreign_key" => AddForeignKey,
            "removeForeignKey" | "remove_foreign_key" => RemoveForeignKey,
            "createCollection" | "create_collection" => CreateCollection,
            "dropCollection" | "drop_collection" => DropCollection,
            "renameCollection" | "rename_collection" => RenameCollection,
            "createBucket" | "create_namespace" => CreateNamespace,
            "dropBucket" | "drop_namespace" => DropNamespace,
            "withBucket" | "with_namespace" => WithNamespace,
            "getBucketNames" | "list_namespaces" => ListNamespaces,
            "registerModel" | "register_model" => RegisterModel,
            "getModel" | "get_model" => GetModel,
            "runSql" | "run_sql" => RunSql,
            "runN1ql" | "run_n1ql" => RunN1ql,
            "all" => All,
            "addMigrationRecord" | "add_migration_record" => AddMigrationRecord,
            "allLoadedMigrations" | "all_loaded_migrations" => AllLoadedMigrations,
            "deleteMigration" | "delete_migration" => DeleteMigration,
            "addSeedRecord" | "add_seed_record" => AddSeedRecord,
            "allLoadedSeeds" | "all_loaded_seeds" => AllLoadedSeeds,
            "deleteSeed" | "delete_seed" => DeleteSeed,
            "startMigration" | "start_migration" => StartMigration,
            "endMigration" | "end_migration" => EndMigration,
            "mapDataType" | "map_data_type" => MapDataType,
            "close" => Close,
            _ => return None,
        })
    }

    /// The framework's name for the operation.
    pub fn name(self) -> &'static str {
        use Operation::*;

        match self {
            CreateTable => "createTable",
            DropTable => "dropTable",
            RenameTable => "renameTable",
            AddColumn => "addColumn",
            RemoveColumn => "removeColumn",
            RenameColumn => "renameColumn",
            ChangeColumn => "changeColumn",
            ChangeType => "changeType",
            Insert => "insert",
            AddIndex => "addIndex",
            RemoveIndex => "removeIndex",
            ListIndexes => "getIndexes",
            AddForeignKey => "addForeignKey",
            RemoveForeignKey => "removeForeignKey",
            CreateCollection => "createCollection",
            DropCollection => "dropCollection",
            RenameCollection => "renameCollection",
            CreateNamespace => "createBucket",
            DropNamespace => "dropBucket",
            WithNamespace => "withBucket",
            ListNamespaces => "getBucketNames",
            RegisterModel => "registerModel",
            GetModel => "getModel",
            RunSql => "runSql",
            RunN1ql => "runN1ql",
            All => "all",
            AddMigrationRecord => "addMigrationRecord",
            AllLoadedMigrations => "allLoadedMigrations",
            DeleteMigration => "deleteMigration",
            AddSeedRecord => "addSeedRecord",
            AllLoadedSeeds => "allLoadedSeeds",
            DeleteSeed => "deleteSeed",
            StartMigration => "startMigration",
            EndMigration => "endMigration",
            MapDataType => "mapDataType",
            Close => "close",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
