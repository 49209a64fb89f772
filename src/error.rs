use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComboError {
    #[error("Invalid entries: {0}")]
    InvalidEntries(String),

    #[error("No entries found in input")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
