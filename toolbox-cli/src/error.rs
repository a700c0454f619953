use shared::DecodingError;
use std::path::PathBuf;
use thiserror::Error;

pub type ToolboxResult<T> = Result<T, ToolboxError>;

#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {}: {source}", .path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: DecodingError,
    },
    #[error("Serialization error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    #[error("Refusing to overwrite {}: no free file name left", .path.display())]
    Exists { path: PathBuf },
    #[error("{failed} of {total} files failed to decode")]
    CheckFailed { failed: usize, total: usize },
}

impl ToolboxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
