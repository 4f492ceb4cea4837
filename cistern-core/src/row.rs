use crate::Value;
use std::sync::Arc;

/// Column labels shared by every row of a result set or insert batch.
pub type Labels = Arc<[String]>;

/// A row of labeled values.
///
/// Lookup by label is a linear scan, rows are narrow and the scan beats a
/// map for the widths that occur in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub labels: Labels,
    pub values: Box<[Value]>,
}

impl Row {
    pub fn new(labels: Labels, values: impl Into<Box<[Value]>>) -> Self {
        Self {
            labels,
            values: values.into(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Value)>) -> Self {
        let (labels, values): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self {
            labels: labels.into(),
            values: values.into(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        let position = self.labels.iter().position(|l| l == label)?;
        self.values.get(position)
    }
}

/// Rows returned by a query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First value of the first row, where aggregates land.
    pub fn scalar(&self) -> Option<&Value> {
        self.rows.first()?.values.first()
    }
}

impl From<Vec<Row>> for ResultSet {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for ResultSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
