use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// An absent element was passed, alone or inside a batch.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An element to remove is not in the tree.
    #[error("Element not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type TreeResult<T> = Result<T, TreeError>;
