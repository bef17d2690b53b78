//! Wingspan CSV to JSON Converter
//!
//! Converts header-first CSV exports encoded in Windows-1252 into
//! pretty-printed UTF-8 JSON arrays of row objects.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, ConversionMetadata, DatasetSpec};
pub use error::{ConversionError, ConversionResult};
pub use parser::{CsvSource, Dataset, Record};

use std::path::Path;

/// Convert a CSV file to a JSON file, optionally echoing each record to stdout
pub fn convert(input: &Path, output: &Path, echo: bool) -> ConversionResult<ConversionMetadata> {
    let config = ConversionConfig::default().with_echo(echo);
    convert_with_config(input, output, &config)
}

/// Convert a CSV file to a JSON file with custom configuration
pub fn convert_with_config(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> ConversionResult<ConversionMetadata> {
    conversion::convert_csv_to_json(input, output, config)
}
