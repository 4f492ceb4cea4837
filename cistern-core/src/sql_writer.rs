use crate::{
    ColumnDef, DataType, Filter, JoinClause, JoinType, Operand, Operator, Order, Predicate, Row,
    SelectQuery, TableSchema, Value, separated_by,
};
use std::fmt::Write;

macro_rules! write_quoted_integer {
    ($out:expr, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push('\'');
        $out.push_str(buffer.format($value));
        $out.push('\'');
    }};
}

macro_rules! write_quoted_float {
    ($out:expr, $value:expr) => {{
        let mut buffer = ryu::Buffer::new();
        $out.push('\'');
        $out.push_str(buffer.format($value));
        $out.push('\'');
    }};
}

/// Renders queries, values and DDL into SQL text.
///
/// Every method has a default body producing the generic dialect, a backend
/// overrides the ones it disagrees with and inherits the rest. All output
/// goes through a `&mut String` so composite statements assemble without
/// intermediate allocations.
///
/// Scalar values are rendered inside single quotes across the board, also
/// numbers, so a value survives whichever column type the server resolves.
/// Identifiers are emitted verbatim and are trusted to be well formed.
pub trait SqlWriter {
    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Null => out.push_str("NULL"),
            Value::Boolean(v) => out.push_str(if *v { "'true'" } else { "'false'" }),
            Value::Int8(v) => write_quoted_integer!(out, *v),
            Value::Int16(v) => write_quoted_integer!(out, *v),
            Value::Int32(v) => write_quoted_integer!(out, *v),
            Value::Int64(v) => write_quoted_integer!(out, *v),
            Value::UInt8(v) => write_quoted_integer!(out, *v),
            Value::UInt16(v) => write_quoted_integer!(out, *v),
            Value::UInt32(v) => write_quoted_integer!(out, *v),
            Value::UInt64(v) => write_quoted_integer!(out, *v),
            Value::Float32(v) => write_quoted_float!(out, *v),
            Value::Float64(v) => write_quoted_float!(out, *v),
            Value::Decimal(v) => {
                let _ = write!(out, "'{}'", v);
            }
            Value::Text(v) => self.write_value_text(out, v),
            Value::Date(v) => {
                out.push('\'');
                self.write_value_date(out, v);
                out.push('\'');
            }
            Value::DateTime(v) => {
                out.push('\'');
                self.write_value_date(out, &v.date());
                out.push(' ');
                self.write_value_time(out, &v.time());
                out.push('\'');
            }
            Value::Uuid(v) => {
                let _ = write!(out, "'{}'", v);
            }
            Value::Array(v) => {
                out.push('[');
                separated_by(out, v, |out, value| self.write_value(out, value), ", ");
                out.push(']');
            }
        }
    }

    /// Quotes and escapes a string literal. Embedded quotes are doubled and
    /// backslashes doubled, both escapes the server unescapes on read.
    fn write_value_text(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replacement = match c {
                '\'' => "''",
                '\\' => "\\\\",
                '\n' => "\\n",
                '\r' => "\\r",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replacement);
            position = i + c.len_utf8();
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_date(&self, out: &mut String, value: &time::Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day(),
        );
    }

    fn write_value_time(&self, out: &mut String, value: &time::Time) {
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second(),
        );
        let mut subsecond = value.nanosecond();
        if subsecond > 0 {
            let mut width = 9;
            while subsecond % 10 == 0 {
                subsecond /= 10;
                width -= 1;
            }
            let _ = write!(out, ".{:0width$}", subsecond);
        }
    }

    fn write_column_type(&self, out: &mut String, value: &DataType) {
        match value {
            DataType::Boolean => out.push_str("Bool"),
            DataType::Int8 => out.push_str("Int8"),
            DataType::Int16 => out.push_str("Int16"),
            DataType::Int32 => out.push_str("Int32"),
            DataType::Int64 => out.push_str("Int64"),
            DataType::UInt8 => out.push_str("UInt8"),
            DataType::UInt16 => out.push_str("UInt16"),
            DataType::UInt32 => out.push_str("UInt32"),
            DataType::UInt64 => out.push_str("UInt64"),
            DataType::Float32 => out.push_str("Float32"),
            DataType::Float64 => out.push_str("Float64"),
            DataType::Decimal(precision, scale) => {
                let _ = write!(out, "Decimal({}, {})", precision, scale);
            }
            DataType::String => out.push_str("String"),
            DataType::FixedString(length) => {
                let _ = write!(out, "FixedString({})", length);
            }
            DataType::Date => out.push_str("Date"),
            DataType::DateTime => out.push_str("DateTime"),
            DataType::DateTime64(precision) => {
                let _ = write!(out, "DateTime64({})", precision);
            }
            DataType::Uuid => out.push_str("UUID"),
            DataType::Array(inner) => {
                out.push_str("Array(");
                self.write_column_type(out, inner);
                out.push(')');
            }
            DataType::Nullable(inner) => {
                out.push_str("Nullable(");
                self.write_column_type(out, inner);
                out.push(')');
            }
            DataType::LowCardinality(inner) => {
                out.push_str("LowCardinality(");
                self.write_column_type(out, inner);
                out.push(')');
            }
        }
    }

    fn operator_sql(&self, op: &Operator) -> &'static str {
        match op {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Ne => "!=",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }

    fn write_predicate(&self, out: &mut String, predicate: &Predicate) {
        out.push_str(&predicate.column);
        out.push(' ');
        out.push_str(self.operator_sql(&predicate.op));
        out.push(' ');
        match (&predicate.operand, predicate.op.expects_list()) {
            (Operand::One(value), false) => self.write_value(out, value),
            (Operand::One(value), true) => {
                out.push('(');
                self.write_value(out, value);
                out.push(')');
            }
            (Operand::Many(values), true) => {
                out.push('(');
                separated_by(out, values, |out, value| self.write_value(out, value), ", ");
                out.push(')');
            }
            // Scalar operator with a list operand, render the array literal.
            (Operand::Many(values), false) => {
                out.push('[');
                separated_by(out, values, |out, value| self.write_value(out, value), ", ");
                out.push(']');
            }
        }
    }

    fn write_filter(&self, out: &mut String, filter: &Filter) {
        separated_by(
            out,
            &filter.predicates,
            |out, predicate| self.write_predicate(out, predicate),
            " AND ",
        );
    }

    fn write_join_type(&self, out: &mut String, value: &JoinType) {
        out.push_str(match value {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
        });
    }

    fn write_join(&self, out: &mut String, value: &JoinClause) {
        self.write_join_type(out, &value.join);
        out.push(' ');
        out.push_str(&value.table);
        out.push_str(" ON ");
        out.push_str(&value.on);
    }

    fn write_order(&self, out: &mut String, value: &Order) {
        out.push_str(match value {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        });
    }

    fn write_select(&self, out: &mut String, query: &SelectQuery) {
        out.push_str("SELECT ");
        if query.columns.is_empty() {
            out.push('*');
        } else {
            separated_by(out, &query.columns, |out, c| out.push_str(c), ", ");
        }
        out.push_str(" FROM ");
        out.push_str(&query.source);
        for join in &query.joins {
            out.push(' ');
            self.write_join(out, join);
        }
        if !query.filter.is_empty() {
            out.push_str(" WHERE ");
            self.write_filter(out, &query.filter);
        }
        if !query.group_by.is_empty() {
            out.push_str(" GROUP BY ");
            separated_by(out, &query.group_by, |out, c| out.push_str(c), ", ");
        }
        if !query.having.is_empty() {
            out.push_str(" HAVING ");
            separated_by(out, &query.having, |out, c| out.push_str(c), " AND ");
        }
        if !query.order_by.is_empty() {
            out.push_str(" ORDER BY ");
            separated_by(
                out,
                &query.order_by,
                |out, (column, order)| {
                    out.push_str(column);
                    out.push(' ');
                    self.write_order(out, order);
                },
                ", ",
            );
        }
        if let Some(limit) = query.limit {
            let mut buffer = itoa::Buffer::new();
            out.push_str(" LIMIT ");
            out.push_str(buffer.format(limit));
        }
        if let Some(offset) = query.offset {
            let mut buffer = itoa::Buffer::new();
            out.push_str(" OFFSET ");
            out.push_str(buffer.format(offset));
        }
    }

    fn write_insert(&self, out: &mut String, table: &str, rows: &[Row]) {
        let Some(first) = rows.first() else {
            return;
        };
        out.push_str("INSERT INTO ");
        out.push_str(table);
        out.push_str(" (");
        separated_by(out, first.labels.iter(), |out, c| out.push_str(c), ", ");
        out.push_str(") VALUES\n");
        separated_by(
            out,
            rows,
            |out, row| {
                out.push('(');
                separated_by(
                    out,
                    row.values.iter(),
                    |out, value| self.write_value(out, value),
                    ", ",
                );
                out.push(')');
            },
            ",\n",
        );
    }

    fn write_column_def(&self, out: &mut String, column: &ColumnDef) {
        out.push_str(&column.name);
        out.push(' ');
        self.write_column_type(out, &column.data_type);
        if let Some(default) = &column.default {
            out.push_str(" DEFAULT ");
            self.write_value(out, default);
        }
        if let Some(comment) = &column.comment {
            out.push_str(" COMMENT ");
            self.write_value_text(out, comment);
        }
    }

    fn write_create_table(&self, out: &mut String, schema: &TableSchema, if_not_exists: bool) {
        out.push_str("CREATE TABLE ");
        if if_not_exists {
            out.push_str("IF NOT EXISTS ");
        }
        out.push_str(&schema.table);
        out.push_str(" (\n");
        separated_by(
            out,
            &schema.columns,
            |out, column| self.write_column_def(out, column),
            ",\n",
        );
        out.push_str("\n) ENGINE = ");
        out.push_str(&schema.options.engine);
        let order_by = &schema.options.order_by;
        if !order_by.is_empty() {
            out.push_str("\nORDER BY ");
            if let [single] = order_by.as_slice() {
                out.push_str(single);
            } else {
                out.push('(');
                separated_by(out, order_by, |out, c| out.push_str(c), ", ");
                out.push(')');
            }
        }
        if let Some(partition_by) = &schema.options.partition_by {
            out.push_str("\nPARTITION BY ");
            out.push_str(partition_by);
        }
        if !schema.options.settings.is_empty() {
            out.push_str("\nSETTINGS ");
            separated_by(
                out,
                &schema.options.settings,
                |out, (name, value)| {
                    out.push_str(name);
                    out.push_str(" = ");
                    out.push_str(value);
                },
                ", ",
            );
        }
    }

    fn write_drop_table(&self, out: &mut String, table: &str, if_exists: bool) {
        out.push_str("DROP TABLE ");
        if if_exists {
            out.push_str("IF EXISTS ");
        }
        out.push_str(table);
    }

    fn write_add_column(&self, out: &mut String, table: &str, column: &ColumnDef) {
        out.push_str("ALTER TABLE ");
        out.push_str(table);
        out.push_str(" ADD COLUMN ");
        self.write_column_def(out, column);
    }

    fn write_drop_column(&self, out: &mut String, table: &str, column: &str) {
        out.push_str("ALTER TABLE ");
        out.push_str(table);
        out.push_str(" DROP COLUMN ");
        out.push_str(column);
    }
}

/// The dialect neutral writer every backend starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl SqlWriter for GenericSqlWriter {}
