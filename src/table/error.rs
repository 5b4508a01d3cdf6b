use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Invalid number: {0} (expected 00–99, a 3-digit multiple of 111 or a 4-digit multiple of 1111)")]
    InvalidNumber(String),

    #[error("Number not in table: {0}")]
    NotInTable(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("No message update to undo")]
    NoMessageToUndo,
}
