//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::batch::{self, DatasetSpec, ALL_DATASETS};
use crate::conversion::{ConversionConfig, ConversionMetadata};
use crate::error::{ConversionError, ConversionResult};

pub mod logger;
pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "wingconv")]
#[command(about = "Convert Wingspan card-data CSV exports (Windows-1252) to JSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory holding the dataset CSV files; JSON is written next to them
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Convert only these datasets (default: all, in fixed order)
    #[arg(long, value_enum)]
    pub dataset: Vec<DatasetArg>,

    /// Convert a single CSV file instead of the known datasets
    #[arg(short, long, conflicts_with = "dataset")]
    pub input: Option<PathBuf>,

    /// Output path for --input (default: input path with a .json extension)
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level in the output file (0-8, default: 4)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Do not print each record while converting
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Continue converting other datasets when one fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Dataset names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetArg {
    Birds,
    Bonus,
    Goals,
}

impl From<DatasetArg> for DatasetSpec {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Birds => batch::BIRDS,
            DatasetArg::Bonus => batch::BONUS,
            DatasetArg::Goals => batch::GOALS,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::for_datasets().with_echo(!args.quiet);
        if let Some(indent) = args.indent {
            config = config
                .with_output_indent(indent)
                .map_err(ConversionError::configuration)?;
        }

        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Datasets to convert, always in the fixed birds, bonus, goals order
    pub fn datasets(&self) -> Vec<DatasetSpec> {
        if self.args.dataset.is_empty() {
            return ALL_DATASETS.to_vec();
        }
        let selected: Vec<DatasetSpec> = self.args.dataset.iter().map(|&d| d.into()).collect();
        ALL_DATASETS
            .iter()
            .copied()
            .filter(|d| selected.contains(d))
            .collect()
    }

    /// Input and output paths when converting a single file
    pub fn single_file(&self) -> Option<(PathBuf, PathBuf)> {
        let input = self.args.input.clone()?;
        let output = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| path_mapping::default_output_path(&input));
        Some((input, output))
    }

    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Render conversion statistics for one file
    pub fn format_statistics(label: &str, metadata: &ConversionMetadata) -> String {
        format!(
            "{}: {} rows x {} columns, {} -> {} in {}",
            label,
            metadata.rows,
            metadata.columns,
            Self::format_file_size(metadata.input_bytes),
            Self::format_file_size(metadata.output_bytes),
            Self::format_duration(Duration::from_millis(metadata.processing_time_ms)),
        )
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    match error {
        ConversionError::NotFound { .. } => {
            eprintln!("\nTip: Use --data-dir to point at the directory holding the CSV exports");
        }
        ConversionError::Decode { .. } => {
            eprintln!("\nTip: Input files must be saved as Windows-1252 (Western European)");
        }
        _ => {}
    }
}
