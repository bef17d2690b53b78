//! Strict Windows-1252 decoding
//!
//! encoding_rs follows the WHATWG mapping, which assigns the five holes of
//! code page 1252 to C1 control characters. Those bytes are rejected here so
//! that input with undefined bytes fails instead of decoding to garbage.

use encoding_rs::WINDOWS_1252;
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};

/// Byte values with no assigned character in code page 1252
pub const UNDEFINED_BYTES: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Encoding label reported in logs
pub const INPUT_ENCODING: &str = "windows-1252";

/// Position and value of the first undefined byte, if any
pub fn find_undefined_byte(bytes: &[u8]) -> Option<(usize, u8)> {
    bytes
        .iter()
        .position(|b| UNDEFINED_BYTES.contains(b))
        .map(|offset| (offset, bytes[offset]))
}

/// Decode Windows-1252 bytes into UTF-8 text
pub fn decode_windows_1252(bytes: &[u8], path: &Path) -> ConversionResult<String> {
    if let Some((offset, byte)) = find_undefined_byte(bytes) {
        return Err(ConversionError::Decode {
            path: path.to_path_buf(),
            offset,
            byte,
        });
    }

    // Every remaining byte maps to exactly one character, so this cannot fail
    let text = WINDOWS_1252.decode_without_bom_handling(bytes).0;
    Ok(text.into_owned())
}
