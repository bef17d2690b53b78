//! Row and dataset types
//!
//! A `Record` is keyed by the header row, so its shape is only known at
//! runtime. It is an ordered string map; serde_json's `preserve_order`
//! feature keeps the keys in header order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One data row, keyed by header field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by zipping header names with cell values.
    ///
    /// Cells beyond `values.len()` are filled with an empty string. A repeated
    /// header name keeps its first position and takes the later value.
    pub fn from_header<'a, I>(header: &[String], values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut record = Self::new();
        let mut values = values.into_iter();
        for name in header {
            record.insert(name.clone(), values.next().unwrap_or("").to_string());
        }
        record
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, Value::String(value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// All rows of one input file, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header names with duplicates removed, first occurrence wins
    pub fn unique_header(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.header.len());
        for name in &self.header {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }
}
