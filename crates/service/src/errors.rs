use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    /// Takes any displayable id so out-of-range path ids report the raw text.
    pub fn item_not_found(id: impl std::fmt::Display) -> Self { Self::NotFound(format!("Item with ID {id} not found")) }
}
