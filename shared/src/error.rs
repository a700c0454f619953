use serde_json::error::Category;
use thiserror::Error;

/// Raised when an encoding cannot be parsed into a tool export record.
///
/// Decoding never yields a partially filled record: either every field was
/// read or this error is returned.
#[derive(Error, Debug)]
#[error("Decoding error: {0}")]
pub struct DecodingError(#[from] serde_json::Error);

/// Broad class of a [`DecodingError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodingErrorCategory {
    /// The input is not well-formed JSON.
    Syntax,
    /// Well-formed JSON whose values have the wrong type for a field.
    Data,
    /// The input ended before a complete value was read.
    Eof,
    /// The underlying reader failed.
    Io,
}

impl DecodingError {
    /// 1-based line of the failure, 0 when unknown.
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// 1-based column of the failure, 0 when unknown.
    pub fn column(&self) -> usize {
        self.0.column()
    }

    pub fn category(&self) -> DecodingErrorCategory {
        match self.0.classify() {
            Category::Syntax => DecodingErrorCategory::Syntax,
            Category::Data => DecodingErrorCategory::Data,
            Category::Eof => DecodingErrorCategory::Eof,
            Category::Io => DecodingErrorCategory::Io,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.category() == DecodingErrorCategory::Eof
    }
}
