use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for artlens operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    #[diagnostic(code(artlens::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(artlens::io))]
    Io { path: PathBuf, message: String },

    #[error("Invalid dimensions: {width}x{height}")]
    #[diagnostic(code(artlens::dimensions))]
    InvalidDimensions {
        width: i64,
        height: i64,
        #[help]
        help: Option<String>,
    },

    #[error("Style '{style}' has no renderer")]
    #[diagnostic(
        code(artlens::style),
        help("Pick one of: geometric, pixel, gradient, fractal")
    )]
    UnsupportedStyle { style: String },

    #[error("Failed to store {path}: {message}")]
    #[diagnostic(code(artlens::storage))]
    StorageFailure { path: PathBuf, message: String },

    #[error("Render timed out after {}ms", after.as_millis())]
    #[diagnostic(
        code(artlens::timeout),
        help("Raise timeout_ms in artlens.yaml or request a smaller canvas")
    )]
    Timeout { after: Duration },

    #[error("Render cancelled")]
    #[diagnostic(code(artlens::cancelled))]
    Cancelled,

    #[error("Render worker failed: {message}")]
    #[diagnostic(code(artlens::worker))]
    Worker { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(artlens::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ArtError>;
