use crate::{DataType, Error, IntoColumns, Labels, Result, Value};

/// One column of a table definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub default: Option<Value>,
    pub comment: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            default: None,
            comment: None,
        }
    }

    /// Builds a column from a textual type declaration, reporting the column
    /// name when the type does not resolve.
    pub fn parse(name: impl Into<String>, type_name: &str) -> Result<Self> {
        let name = name.into();
        match DataType::parse(type_name) {
            Ok(data_type) => Ok(Self::new(name, data_type)),
            Err(Error::MissingDataType { type_name, .. }) => Err(Error::MissingDataType {
                column: name,
                type_name,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Table level clauses of a `CREATE TABLE`.
///
/// The engine is an opaque expression carried into the statement verbatim,
/// settings keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub engine: String,
    pub order_by: Vec<String>,
    pub partition_by: Option<String>,
    pub settings: Vec<(String, String)>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            engine: "MergeTree()".into(),
            order_by: Vec::new(),
            partition_by: None,
            settings: Vec::new(),
        }
    }
}

/// The full definition of a table: name, columns and storage clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnDef>,
    pub options: TableOptions,
}

impl TableSchema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            options: TableOptions::default(),
        }
    }

    /// Builds a schema from `(name, type)` pairs of a textual declaration.
    pub fn from_fields(table: impl Into<String>, fields: &[(&str, &str)]) -> Result<Self> {
        let mut schema = Self::new(table);
        for (name, type_name) in fields {
            schema = schema.column_def(ColumnDef::parse(*name, type_name)?);
        }
        Ok(schema)
    }

    pub fn column(self, name: impl Into<String>, data_type: DataType) -> Self {
        self.column_def(ColumnDef::new(name, data_type))
    }

    pub fn column_def(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.options.engine = engine.into();
        self
    }

    pub fn order_by(mut self, columns: impl IntoColumns) -> Self {
        self.options.order_by = columns.into_columns();
        self
    }

    pub fn partition_by(mut self, expression: impl Into<String>) -> Self {
        self.options.partition_by = Some(expression.into());
        self
    }

    pub fn setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.settings.push((name.into(), value.into()));
        self
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Column names in declaration order, shared across the rows of an
    /// insert batch.
    pub fn labels(&self) -> Labels {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}
