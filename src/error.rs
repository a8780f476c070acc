use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for separation operations
pub type SeparateResult<T> = Result<T, SeparateError>;

/// Errors surfaced while validating and separating an input file
#[derive(Error, Debug)]
pub enum SeparateError {
    /// Input path does not exist
    #[error("File not found: {}", path.display())]
    InputNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Input path exists but is not a regular file
    #[error("Path is not a file: {}", path.display())]
    NotAFile {
        /// The offending path
        path: PathBuf,
    },

    /// Input extension is not a recognized audio format
    #[error("Unsupported file extension: {}", display_extension(extension))]
    UnsupportedFormat {
        /// Extension as given, without the leading dot (empty when absent)
        extension: String,
    },

    /// Input metadata could not be read
    #[error("Cannot access {}: {source}", path.display())]
    Inaccessible {
        /// Path whose metadata lookup failed
        path: PathBuf,
        /// Underlying operating system error
        #[source]
        source: io::Error,
    },

    /// Run was cancelled by the user
    #[error("Processing cancelled by user")]
    Cancelled,

    /// IO error (terminal output, unexpected filesystem failures)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl SeparateError {
    /// Whether this error was produced by input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SeparateError::InputNotFound { .. }
                | SeparateError::NotAFile { .. }
                | SeparateError::UnsupportedFormat { .. }
                | SeparateError::Inaccessible { .. }
        )
    }
}

fn display_extension(extension: &str) -> String {
    if extension.is_empty() {
        "(none)".to_string()
    } else {
        format!(".{extension}")
    }
}
