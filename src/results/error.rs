use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    /// Results file could not be read from disk
    Io { path: PathBuf, source: std::io::Error },

    /// Results file is not valid JSON
    JsonParse { path: PathBuf, source: serde_json::Error },

    /// Path does not point at a .json results file
    NotJson { path: PathBuf },

    /// Document parsed but violates structural expectations
    InvalidDocument { path: PathBuf, reason: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            ReportError::JsonParse { path, source } => {
                write!(f, "JSON parse error ({}): {}", path.display(), source)
            }
            ReportError::NotJson { path } => {
                write!(f, "'{}' is not a JSON results file", path.display())
            }
            ReportError::InvalidDocument { path, reason } => {
                write!(f, "Invalid results document ({}): {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io { source, .. } => Some(source),
            ReportError::JsonParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
