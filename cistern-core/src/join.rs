#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

/// A join attached to a query: `<type> JOIN <table> ON <condition>`.
///
/// Table and condition are raw SQL fragments owned by the caller, aliases
/// like `posts p` go through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join: JoinType,
    pub table: String,
    pub on: String,
}

impl JoinClause {
    pub fn new(join: JoinType, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            join,
            table: table.into(),
            on: on.into(),
        }
    }
}
