use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("push delivery error: {0}")]
    Push(String),

    #[error("kafka error: {0}")]
    Kafka(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<mesaj_fcm_shared::FcmError> for AppError {
    fn from(e: mesaj_fcm_shared::FcmError) -> Self {
        AppError::Push(e.to_string())
    }
}
