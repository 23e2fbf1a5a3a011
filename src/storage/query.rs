use rusqlite::types::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_sql(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Minimal SELECT builder. Table names are expected to be quoted already
/// (see `TablePrefix::table`); values always travel as bound parameters.
#[derive(Clone, Debug, Default)]
pub struct SelectQuery {
    columns: Vec<String>,
    from: Option<(String, String)>,
    joins: Vec<String>,
    conditions: Vec<String>,
    order_by: Vec<(String, Order)>,
    params: Vec<Value>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn from(mut self, table: impl Into<String>, alias: &str) -> Self {
        self.from = Some((table.into(), alias.to_string()));
        self
    }

    pub fn inner_join(mut self, table: impl Into<String>, alias: &str, on: &str) -> Self {
        self.joins
            .push(format!("INNER JOIN {} {} ON {}", table.into(), alias, on));
        self
    }

    pub fn and_where(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: Order) -> Self {
        self.order_by.push((column.into(), order));
        self
    }

    /// Append a positional parameter, matched to the next `?` in order.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn to_sql(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {columns}");
        if let Some((table, alias)) = &self.from {
            sql.push_str(&format!(" FROM {table} {alias}"));
        }
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|(column, order)| format!("{column} {}", order.as_sql()))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }
        sql
    }
}
