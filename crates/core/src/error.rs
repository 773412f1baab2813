use thiserror::Error;

pub type JourneyResult<T> = Result<T, JourneyError>;

#[derive(Error, Debug)]
pub enum JourneyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog validation error: {0}")]
    Validation(String),
}
