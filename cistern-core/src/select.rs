use crate::{
    Executor, Filter, GenericSqlWriter, JoinClause, JoinType, OutputFormat, QueryOptions, Result,
    ResultSet, SqlWriter, Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// Column lists accepted by [`SelectQuery::select`] and friends.
///
/// A single string stays a single entry, `select("*")` means the star
/// projection and is never split.
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(str::to_owned).collect()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|c| (*c).to_owned()).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.iter().map(|c| (*c).to_owned()).collect()
    }
}

/// Fluent builder for a `SELECT` statement.
///
/// Clauses land in the statement in a fixed order regardless of call order:
/// `SELECT`, `FROM`, joins, `WHERE`, `GROUP BY`, `HAVING`, `ORDER BY`,
/// `LIMIT`, `OFFSET`. The projection, source and grouping are replaced on
/// every call while filters, joins, having and ordering accumulate.
///
/// [`SelectQuery::build`] renders the statement without touching the builder,
/// it can be called any number of times with the same result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub columns: Vec<String>,
    pub source: String,
    pub joins: Vec<JoinClause>,
    pub filter: Filter,
    pub group_by: Vec<String>,
    pub having: Vec<String>,
    pub order_by: Vec<(String, Order)>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub params: Vec<(String, Value)>,
    pub format: Option<OutputFormat>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the projection. An empty column list renders as `*`.
    pub fn select(mut self, columns: impl IntoColumns) -> Self {
        self.columns = columns.into_columns();
        self
    }

    /// Replaces the source table. Aliases like `users u` pass through as is.
    pub fn from(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn join(mut self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.joins.push(JoinClause::new(JoinType::Inner, table, on));
        self
    }

    pub fn left_join(mut self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.joins.push(JoinClause::new(JoinType::Left, table, on));
        self
    }

    pub fn right_join(mut self, table: impl Into<String>, on: impl Into<String>) -> Self {
        self.joins.push(JoinClause::new(JoinType::Right, table, on));
        self
    }

    /// Appends the predicates of `filter` to the ones already present.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.merge(filter);
        self
    }

    /// Replaces the grouping columns.
    pub fn group_by(mut self, columns: impl IntoColumns) -> Self {
        self.group_by = columns.into_columns();
        self
    }

    /// Appends a raw `HAVING` conjunct.
    pub fn having(mut self, condition: impl Into<String>) -> Self {
        self.having.push(condition.into());
        self
    }

    /// Appends an ordering key.
    pub fn order_by(mut self, column: impl Into<String>, order: Order) -> Self {
        self.order_by.push((column.into(), order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Attaches a named parameter forwarded to the client on execution. The
    /// statement text is not affected.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Requests an output format from the client on execution.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn build(&self) -> String {
        self.build_with(&GenericSqlWriter::new())
    }

    pub fn build_with<W: SqlWriter>(&self, writer: &W) -> String {
        let mut out = String::with_capacity(256);
        writer.write_select(&mut out, self);
        out
    }

    /// Renders the statement and runs it through `executor`, forwarding the
    /// attached parameters and format.
    pub async fn fetch(&self, executor: &mut impl Executor) -> Result<ResultSet> {
        let options = QueryOptions {
            params: self.params.clone(),
            format: self.format,
        };
        executor.fetch(self.build(), options).await
    }
}
