//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, and the
//! fixed dataset drivers.

pub mod batch;
pub mod config;
pub mod engine;

pub use batch::{convert_all, convert_batch, DatasetSpec, ALL_DATASETS};
pub use config::ConversionConfig;
pub use engine::{
    convert_csv_string, convert_csv_to_json, ConversionEngine, ConversionMetadata, JsonData,
};

pub use crate::error::ConversionResult;
