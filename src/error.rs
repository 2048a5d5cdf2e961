use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal Error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Process exit status used by the command-line front-end.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::NotFound(_) => 2,
            AppError::BadRequest(_) => 3,
            AppError::Unauthenticated => 4,
            AppError::DbError(_) | AppError::Serialization(_) | AppError::Internal(_) => 1,
        }
    }
}
