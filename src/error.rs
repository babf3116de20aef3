use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    #[diagnostic(code(appicon::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(appicon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not open source image {path}: {message}")]
    #[diagnostic(
        code(appicon::decode),
        help("The source must be a readable PNG, JPEG, GIF, BMP or WebP file")
    )]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(appicon::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(appicon::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
