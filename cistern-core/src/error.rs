use thiserror::Error;

/// Failure classes surfaced by the data layer. Errors coming from the
/// underlying client are flattened into the variant matching the operation
/// that triggered them, with the client's own message preserved as text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to establish a connection: {0}")]
    ConnectionFailure(String),
    #[error("connection refused during the authentication check: {0}")]
    AuthenticationFailure(String),
    #[error("query execution failed: {0}")]
    QueryExecutionFailed(String),
    #[error("insert failed: {0}")]
    InsertFailed(String),
    #[error("model `{model}` has no association `{alias}`")]
    UnknownAssociation { model: String, alias: String },
    #[error("column `{column}` declares unresolvable data type `{type_name}`")]
    MissingDataType { column: String, type_name: String },
    #[error("unknown filter operator `{0}`")]
    UnknownOperator(String),
    #[error("no model defined under the name `{0}`")]
    UnknownModel(String),
    #[error("model `{model}` carries no column `{column}`")]
    MissingColumn { model: String, column: String },
}
