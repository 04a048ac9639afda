use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("employee {0} not found")]
    NotFound(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
