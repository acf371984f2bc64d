use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckinError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("field '{field}' rejected input {input:?}: expected {expected}")]
    Parse {
        field: String,
        input: String,
        expected: &'static str,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CheckinError>;
