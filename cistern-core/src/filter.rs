use crate::{Error, Result, Value};
use std::str::FromStr;

/// Comparison operators available in a filter.
///
/// The wire tags accepted by [`Operator::from_str`] are the ones models use
/// in textual filter declarations: `eq`, `gt`, `gte`, `lt`, `lte`, `ne`,
/// `like`, `in`, `notIn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
    Like,
    In,
    NotIn,
}

impl Operator {
    /// Whether the operator compares against a parenthesized list.
    pub fn expects_list(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl FromStr for Operator {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "eq" => Operator::Eq,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "ne" => Operator::Ne,
            "like" => Operator::Like,
            "in" => Operator::In,
            "notIn" => Operator::NotIn,
            _ => return Err(Error::UnknownOperator(s.to_owned())),
        })
    }
}

/// Right hand side of a predicate, a single value or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    One(Value),
    Many(Vec<Value>),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::One(value)
    }
}

impl From<Vec<Value>> for Operand {
    fn from(values: Vec<Value>) -> Self {
        Operand::Many(values)
    }
}

/// One conjunct of a filter: `column op operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: Operator,
    pub operand: Operand,
}

/// An ordered conjunction of predicates.
///
/// Predicates render joined by `AND` in the order they were added, the same
/// column may appear any number of times. An empty filter renders nothing,
/// [`SelectQuery`](crate::SelectQuery) omits the `WHERE` keyword for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Adds a predicate with an explicit operator.
    pub fn op(mut self, column: impl Into<String>, op: Operator, operand: impl Into<Operand>) -> Self {
        self.predicates.push(Predicate {
            column: column.into(),
            op,
            operand: operand.into(),
        });
        self
    }

    /// Adds a predicate from a bare value the way model filters default: a
    /// list value becomes a membership test, anything else an equality.
    pub fn value(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Array(values) => self.op(column, Operator::In, Operand::Many(values)),
            value => self.op(column, Operator::Eq, Operand::One(value)),
        }
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Eq, Operand::One(value.into()))
    }

    pub fn ne(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Ne, Operand::One(value.into()))
    }

    pub fn gt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Gt, Operand::One(value.into()))
    }

    pub fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Gte, Operand::One(value.into()))
    }

    pub fn lt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Lt, Operand::One(value.into()))
    }

    pub fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Operator::Lte, Operand::One(value.into()))
    }

    pub fn like(self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.op(column, Operator::Like, Operand::One(Value::Text(pattern.into())))
    }

    pub fn is_in<T: Into<Value>>(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.op(column, Operator::In, Operand::Many(values))
    }

    pub fn not_in<T: Into<Value>>(
        self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.op(column, Operator::NotIn, Operand::Many(values))
    }

    /// Appends every predicate of `other`, preserving both orders.
    pub fn merge(&mut self, other: Filter) {
        self.predicates.extend(other.predicates);
    }
}
