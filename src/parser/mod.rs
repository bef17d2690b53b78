//! CSV input parsing
//!
//! Reads a header-first, comma-delimited file in Windows-1252 and yields one
//! `Record` per data row, in input order.

pub mod encoding;
pub mod record;

pub use record::{Dataset, Record};

use crate::error::{ConversionError, ConversionResult};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A CSV file on disk
#[derive(Debug, Clone, PartialEq)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes, or `NotFound` if it does not exist
    pub fn size(&self) -> ConversionResult<u64> {
        let metadata = std::fs::metadata(&self.path)
            .map_err(|e| ConversionError::from_input_io(&self.path, e))?;
        if !metadata.is_file() {
            return Err(ConversionError::io(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        Ok(metadata.len())
    }

    /// Read and decode the whole file, refusing inputs above `max_bytes`
    pub fn read(&self, max_bytes: usize) -> ConversionResult<DecodedCsv> {
        let size = self.size()?;
        if size > max_bytes as u64 {
            return Err(ConversionError::TooLarge {
                size,
                limit: max_bytes,
            });
        }

        let bytes =
            std::fs::read(&self.path).map_err(|e| ConversionError::from_input_io(&self.path, e))?;
        let text = encoding::decode_windows_1252(&bytes, &self.path)?;
        debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            encoding = encoding::INPUT_ENCODING,
            "decoded input"
        );

        Ok(DecodedCsv {
            text,
            byte_len: bytes.len() as u64,
        })
    }
}

/// CSV text already converted to UTF-8
#[derive(Debug, Clone)]
pub struct DecodedCsv {
    text: String,
    byte_len: u64,
}

impl DecodedCsv {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let byte_len = text.len() as u64;
        Self { text, byte_len }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the original encoded input
    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub fn records(&self) -> ConversionResult<RecordReader<'_>> {
        RecordReader::new(&self.text)
    }

    /// Collect every row into a `Dataset`
    pub fn to_dataset(&self) -> ConversionResult<Dataset> {
        let reader = self.records()?;
        let mut dataset = Dataset::new(reader.header().to_vec());
        for record in reader {
            dataset.push(record?);
        }
        Ok(dataset)
    }
}

/// Iterator over the data rows of a CSV document
pub struct RecordReader<'a> {
    header: Vec<String>,
    rows: StringRecordsIntoIter<&'a [u8]>,
    row: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> ConversionResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true) // field counts are checked per row below
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        debug!(columns = header.len(), "read header");

        Ok(Self {
            header,
            rows: reader.into_records(),
            row: 0,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }
}

impl Iterator for RecordReader<'_> {
    type Item = ConversionResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let fields = match self.rows.next()? {
            Ok(fields) => fields,
            Err(e) => return Some(Err(e.into())),
        };
        self.row += 1;

        if fields.len() > self.header.len() {
            return Some(Err(ConversionError::Format {
                row: self.row,
                expected: self.header.len(),
                found: fields.len(),
            }));
        }

        Some(Ok(Record::from_header(&self.header, fields.iter())))
    }
}
