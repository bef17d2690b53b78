//! Error types and handling infrastructure for CSV to JSON conversion

use std::path::{Path, PathBuf};

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot decode {} as Windows-1252: undefined byte 0x{byte:02X} at offset {offset}", path.display())]
    Decode {
        path: PathBuf,
        offset: usize,
        byte: u8,
    },

    #[error("Row {row} has {found} fields but the header has {expected}")]
    Format {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge { size: u64, limit: usize },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Output validation failed: {message}")]
    Validation { message: String },
}

impl ConversionError {
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map an IO error from opening an input, turning a missing file into `NotFound`
    pub fn from_input_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::io(path, source)
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Short category name, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Decode { .. } => "decode",
            Self::Format { .. } | Self::Csv(_) => "format",
            Self::Io { .. } => "io",
            Self::TooLarge { .. } => "too_large",
            Self::Serialization(_) => "serialization",
            Self::Configuration { .. } => "configuration",
            Self::Validation { .. } => "validation",
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => {
                format!("Input file does not exist: {}", path.display())
            }
            Self::Csv(err) => match err.position() {
                Some(pos) => format!(
                    "Malformed CSV at line {}: {}",
                    pos.line(),
                    err.kind_message()
                ),
                None => format!("Malformed CSV: {}", err),
            },
            _ => self.to_string(),
        }
    }
}

/// Helper for rendering the inner kind of a csv error without the position prefix
trait CsvKindMessage {
    fn kind_message(&self) -> String;
}

impl CsvKindMessage for csv::Error {
    fn kind_message(&self) -> String {
        match self.kind() {
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8 in field {}", err.field()),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {} fields, found {}", expected_len, len),
            _ => self.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
