//! JSON rendering
//!
//! Output mirrors the layout of a standard pretty printer: one element per
//! line, `": "` between key and value, no trailing newline.

use crate::error::ConversionResult;
use crate::parser::Record;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// Render any serializable value with `indent` spaces per level
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T, indent: u8) -> ConversionResult<String> {
    let indent = " ".repeat(indent as usize);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render the full dataset as a JSON array
pub fn format_dataset(records: &[Record], indent: u8) -> ConversionResult<String> {
    to_json_pretty(records, indent)
}

/// Write one echo block: the record as JSON followed by a blank line
pub fn write_echo_block<W: Write + ?Sized>(
    sink: &mut W,
    record: &Record,
    indent: u8,
) -> std::io::Result<()> {
    let block = to_json_pretty(record, indent)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    write!(sink, "{}\n\n", block)?;
    sink.flush()
}
