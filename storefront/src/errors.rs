// vitrine/src/errors.rs

use thiserror::Error;
use vitrine_flow::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storage Error: {0}")]
  Storage(String),

  #[error("Serialization Error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Render Error: {0}")]
  Render(#[from] minijinja::Error),

  #[error("Admin Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Lets code written against anyhow::Result hand its errors to the stores and session.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(err) => match err.downcast::<std::io::Error>() {
        Ok(io_err) => AppError::Io(io_err),
        Err(err) => AppError::Internal(format!("{:#}", err)),
      },
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
