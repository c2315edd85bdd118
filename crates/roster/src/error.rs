use thiserror::Error;
use tokio_postgres::error::SqlState;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("a student with email {email} already exists")]
    UniquenessViolation { email: String },

    #[error("student with ID {student_id} not found")]
    NotFound { student_id: i32 },

    #[error("postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

impl Error {
    /// Maps a driver error raised while writing `email`, turning a unique
    /// constraint violation into [`Error::UniquenessViolation`].
    pub(crate) fn on_email_write(err: tokio_postgres::Error, email: &str) -> Self {
        if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
            Error::UniquenessViolation {
                email: email.to_string(),
            }
        } else {
            Error::Postgres(err)
        }
    }
}

/// Errors that can occur when reading connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}
