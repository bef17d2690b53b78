use std::path::{Path, PathBuf};

/// Map an input CSV file to the JSON file written next to it.
pub fn default_output_path(input_file: &Path) -> PathBuf {
    let mut out = input_file.to_path_buf();
    out.set_extension("json");
    out
}
