use super::{filter::Where, params::Bind, Comma, Ident, Params, ToSql};

use docmigrate_core::stmt::{self, Returning, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateIndex(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropIndex(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::ListIndexes(stmt) => stmt.to_sql(f),
            Statement::Raw(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_not_exists = self.if_not_exists.then_some(" IF NOT EXISTS");
        let keys = Comma(&self.keys);

        fmt!(
            f,
            "CREATE INDEX " Ident(&self.name) if_not_exists
            " ON " Ident(&self.namespace) "(" keys ")"
        );

        f.with_literals(|f| fmt!(f, Where(self.filter.as_ref())));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " Ident(&self.namespace) Where(Some(&self.filter)));
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "DROP INDEX " Ident(&self.namespace) "." Ident(&self.name));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let key = serde_json::Value::String(self.key.clone());

        fmt!(
            f,
            "INSERT INTO " Ident(&self.namespace) " (KEY, VALUE) VALUES ("
            Bind(&key) ", " Bind(&self.value) ")"
        );
    }
}

impl ToSql for &stmt::ListIndexes {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(
            ["name", "keyspace_id", "index_key", "condition", "state"].map(Ident),
        );
        let namespace = serde_json::Value::String(self.namespace.clone());

        fmt!(
            f,
            "SELECT " columns " FROM system:indexes WHERE " Ident("keyspace_id")
            " = " Bind(&namespace)
        );
    }
}

impl ToSql for &stmt::Raw {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.sql.as_str());

        // Caller text references its own placeholders; only bind the values.
        for param in &self.params {
            f.params.push(param);
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let namespace = Ident(&self.namespace);

        match self.returning {
            Returning::Document => fmt!(f, "SELECT " Ident(&self.namespace) ".*"),
            Returning::Count => fmt!(f, "SELECT COUNT(*) AS " Ident("count")),
        }

        fmt!(f, " FROM " namespace Where(self.filter.as_ref()));

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "UPDATE " Ident(&self.namespace));

        if !self.set.is_empty() {
            fmt!(f, " SET " Comma(&self.set));
        }

        if !self.unset.is_empty() {
            fmt!(f, " UNSET " Comma(&self.unset));
        }

        fmt!(f, Where(self.filter.as_ref()));
    }
}
