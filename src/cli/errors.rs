use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Tilecut(#[from] tilecut::Error),
}
