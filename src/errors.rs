use thiserror::Error;

/// Errors that can occur during snippet resolution and doc generation.
#[derive(Error, Debug)]
pub enum SmartDocError {
    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("generation error: {message}")]
    Generation { message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `SmartDocError`.
pub type Result<T> = std::result::Result<T, SmartDocError>;
