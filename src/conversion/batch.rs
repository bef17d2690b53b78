//! Fixed dataset drivers
//!
//! Each known dataset pairs a CSV export with the JSON file it becomes. The
//! batch runner converts them in declaration order.

use crate::conversion::engine::{ConversionEngine, ConversionMetadata};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::ConversionError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One known dataset: where it is read from and written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub name: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}

impl DatasetSpec {
    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.input)
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output)
    }
}

pub const BIRDS: DatasetSpec = DatasetSpec {
    name: "birds",
    input: "wingspan-20221201-Birds.csv",
    output: "wingspan-birds-data.json",
};

pub const BONUS: DatasetSpec = DatasetSpec {
    name: "bonus",
    input: "wingspan-20221201-Bonus.csv",
    output: "wingspan-bonus-data.json",
};

pub const GOALS: DatasetSpec = DatasetSpec {
    name: "goals",
    input: "wingspan-20221201-Goals.csv",
    output: "wingspan-goals-data.json",
};

/// All datasets, in the order they are converted
pub const ALL_DATASETS: [DatasetSpec; 3] = [BIRDS, BONUS, GOALS];

/// Look up a dataset by name
pub fn find_dataset(name: &str) -> Option<DatasetSpec> {
    ALL_DATASETS
        .iter()
        .copied()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Convert one dataset found in `dir`
pub fn convert_dataset<W: Write + ?Sized>(
    dataset: &DatasetSpec,
    dir: &Path,
    engine: &ConversionEngine,
    sink: &mut W,
) -> ConversionResult<ConversionMetadata> {
    let input = dataset.input_path(dir);
    let output = dataset.output_path(dir);
    info!(dataset = dataset.name, input = %input.display(), "converting");

    let metadata = engine.convert_with_echo(&input, &output, sink)?;
    info!(
        dataset = dataset.name,
        rows = metadata.rows,
        output = %output.display(),
        "converted"
    );
    Ok(metadata)
}

pub fn convert_birds(dir: &Path) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(ConversionConfig::for_datasets());
    convert_dataset(&BIRDS, dir, &engine, &mut std::io::stdout().lock())
}

pub fn convert_bonus(dir: &Path) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(ConversionConfig::for_datasets());
    convert_dataset(&BONUS, dir, &engine, &mut std::io::stdout().lock())
}

pub fn convert_goals(dir: &Path) -> ConversionResult<ConversionMetadata> {
    let engine = ConversionEngine::new(ConversionConfig::for_datasets());
    convert_dataset(&GOALS, dir, &engine, &mut std::io::stdout().lock())
}

/// Per-dataset result of a batch run
#[derive(Debug)]
pub struct BatchReport {
    pub converted: Vec<(DatasetSpec, ConversionMetadata)>,
    pub failed: Vec<(DatasetSpec, ConversionError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert `datasets` in order.
///
/// Without `continue_on_error` the first failure is returned and later
/// datasets are not attempted.
pub fn convert_batch<W: Write + ?Sized>(
    datasets: &[DatasetSpec],
    dir: &Path,
    config: &ConversionConfig,
    continue_on_error: bool,
    sink: &mut W,
) -> ConversionResult<BatchReport> {
    let engine = ConversionEngine::new(config.clone());
    let mut report = BatchReport {
        converted: Vec::new(),
        failed: Vec::new(),
    };

    for dataset in datasets {
        match convert_dataset(dataset, dir, &engine, sink) {
            Ok(metadata) => report.converted.push((*dataset, metadata)),
            Err(e) => {
                error!(dataset = dataset.name, kind = e.kind(), "conversion failed: {}", e);
                if continue_on_error {
                    report.failed.push((*dataset, e));
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Convert every known dataset in `dir`, stopping at the first failure
pub fn convert_all(dir: &Path, config: &ConversionConfig) -> ConversionResult<BatchReport> {
    convert_batch(
        &ALL_DATASETS,
        dir,
        config,
        false,
        &mut std::io::stdout().lock(),
    )
}
