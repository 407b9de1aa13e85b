use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root does not exist or is not a directory: {0}")]
    InvalidRoot(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::IoError(err.to_string())
    }
}
