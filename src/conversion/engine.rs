//! Core conversion engine for CSV to JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use crate::formatter::{format_dataset, write_echo_block};
use crate::parser::{CsvSource, Dataset, DecodedCsv};
use crate::validation::DatasetValidator;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Rendered JSON plus what was learned while producing it
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionMetadata {
    /// Data rows read (header excluded)
    pub rows: usize,
    /// Header fields
    pub columns: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub processing_time_ms: u64,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert `input` to `output`, echoing records to standard output
    pub fn convert(&self, input: &Path, output: &Path) -> ConversionResult<ConversionMetadata> {
        let stdout = std::io::stdout();
        let mut sink = stdout.lock();
        self.convert_with_echo(input, output, &mut sink)
    }

    /// Convert `input` to `output`, echoing records to `sink` when enabled.
    ///
    /// The output file is only touched once every row has been read and
    /// rendered, so a failed conversion leaves an existing file as it was.
    pub fn convert_with_echo<W: Write + ?Sized>(
        &self,
        input: &Path,
        output: &Path,
        sink: &mut W,
    ) -> ConversionResult<ConversionMetadata> {
        let start_time = Instant::now();
        self.config
            .validate()
            .map_err(ConversionError::configuration)?;

        let csv = CsvSource::new(input).read(self.config.max_input_bytes)?;
        let mut data = self.render(&csv, sink)?;
        self.write_output(output, &data.content)?;

        data.metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            input = %input.display(),
            output = %output.display(),
            rows = data.metadata.rows,
            "wrote output"
        );
        Ok(data.metadata)
    }

    /// Parse decoded CSV text into JSON without touching the filesystem
    pub fn render<W: Write + ?Sized>(
        &self,
        csv: &DecodedCsv,
        sink: &mut W,
    ) -> ConversionResult<JsonData> {
        let reader = csv.records()?;
        let mut dataset = Dataset::new(reader.header().to_vec());

        for record in reader {
            let record = record?;
            if self.config.echo {
                write_echo_block(sink, &record, self.config.echo_indent)
                    .map_err(|e| ConversionError::io(Path::new("<stdout>"), e))?;
            }
            dataset.push(record);
        }

        let content = format_dataset(&dataset.records, self.config.output_indent)?;

        if self.config.validate_output {
            DatasetValidator::new(true).validate(&content, &dataset)?;
        }

        let metadata = ConversionMetadata {
            rows: dataset.len(),
            columns: dataset.header.len(),
            input_bytes: csv.byte_len(),
            output_bytes: content.len() as u64,
            processing_time_ms: 0,
        };

        Ok(JsonData { content, metadata })
    }

    fn write_output(&self, output: &Path, content: &str) -> ConversionResult<()> {
        if self.config.create_parent_dirs {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| ConversionError::io(parent, e))?;
            }
        }

        std::fs::write(output, content).map_err(|e| ConversionError::io(output, e))
    }
}

/// Convert a CSV file to a JSON file with the given configuration
pub fn convert_csv_to_json(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(input, output)
}

/// Convert CSV text already in memory to a JSON string
pub fn convert_csv_string(text: &str, config: &ConversionConfig) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone());
    engine.render(&DecodedCsv::from_text(text), &mut std::io::sink())
}
