//! Error types and handling for the Blink OS site core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the site core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Site content errors
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Page rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid configuration format: {message}")]
    InvalidFormat { message: String },
}

/// Site content errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No page defined for route '{path}'")]
    MissingPage { path: String },

    #[error("Route '{path}' is defined by more than one page")]
    DuplicatePage { path: String },

    #[error("Action '{label}' targets unknown route '{path}'")]
    UnknownActionTarget { label: String, path: String },
}

/// Page rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template '{name}' failed to register: {message}")]
    Template { name: String, message: String },

    #[error("Failed to render '{path}': {message}")]
    Page { path: String, message: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
