use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The definitions file is not part of the source directory.
    #[error("definitions file was not found: {}", path.display())]
    ConfigurationMissing { path: PathBuf },

    /// A source document lacks an expected element or attribute, or one of
    /// its values cannot be parsed.
    #[error("{file}: {reason}")]
    MalformedInput { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read XML: {0}")]
    XmlRead(#[from] xml::reader::Error),

    #[error("failed to write XML: {0}")]
    XmlWrite(#[from] xml::writer::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn malformed(file: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::MalformedInput {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
