use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("item text is empty")]
    EmptyText,

    #[error("item already exists: {0}")]
    Duplicate(String),

    #[error("no item at the requested position")]
    InvalidSelection,

    #[error("the list is empty")]
    EmptyList,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
