use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty message")]
    EmptyMessage,

    #[error("Unrecognized message format: {0}")]
    UnrecognizedFormat(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
