use crate::{Config, ResultSet, Row, Value};
use std::{fmt::Display, future::Future};

/// Response encodings a client can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    JsonEachRow,
    TabSeparated,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::JsonEachRow => "JSONEachRow",
            OutputFormat::TabSeparated => "TabSeparated",
        }
    }
}

/// Per query execution knobs forwarded to the client untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub params: Vec<(String, Value)>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOptions {
    pub format: OutputFormat,
}

/// The transport the data layer delegates to.
///
/// A client owns one live connection, speaks the server protocol and keeps
/// its own error type. The data layer never interprets client errors, it
/// wraps their text into its own failure classes at the call site.
pub trait Client: Send + Sized {
    type Error: Display + Send;

    fn connect(config: &Config) -> impl Future<Output = Result<Self, Self::Error>> + Send;

    fn query(
        &mut self,
        sql: &str,
        options: &QueryOptions,
    ) -> impl Future<Output = Result<ResultSet, Self::Error>> + Send;

    fn insert(
        &mut self,
        table: &str,
        rows: Vec<Row>,
        options: &InsertOptions,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn close(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
