use super::{value::Param, Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(|column| Ident(&column.name)));
        let values = Comma(
            self.pairs()
                .map(|(column, value)| Assigned { column, value }),
        );

        fmt!(f, "INSERT INTO " Ident(&self.table) " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;

        fmt!(f, "UPDATE " Ident(&self.table) " SET " assignments " WHERE " filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let value = Assigned {
            column: &self.column,
            value: &self.value,
        };

        fmt!(f, Ident(&self.column.name) " = " value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " filter);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Projected));
        let filter = self.filter.as_ref().map(|filter| (" WHERE ", filter));
        let order_by = (!self.order_by.is_empty()).then(|| (" ORDER BY ", Comma(&self.order_by)));

        fmt!(f, "SELECT " columns " FROM " Ident(&self.table) filter order_by);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let order = match self.order {
            stmt::Direction::Asc => " ASC",
            stmt::Direction::Desc => " DESC",
        };

        fmt!(f, Ident(&self.column.name) order);
    }
}

impl<A: ToSql, B: ToSql> ToSql for (A, B) {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.0 self.1);
    }
}

/// A value written into `column`, typed after the column.
struct Assigned<'a> {
    column: &'a stmt::ColumnRef,
    value: &'a stmt::Expr,
}

impl ToSql for Assigned<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.value {
            stmt::Expr::Value(value) => Param::typed(value, self.column.ty).to_sql(f),
            expr => expr.to_sql(f),
        }
    }
}

/// A selected column. PostgreSQL reads go through text so every column
/// decodes the same way.
struct Projected<'a>(&'a stmt::ColumnRef);

impl ToSql for Projected<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.0.name);

        if f.serializer.is_postgresql() {
            fmt!(f, "CAST(" name " AS text) AS " Ident(&self.0.name));
        } else {
            fmt!(f, name);
        }
    }
}
