// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Parsing of benchmark result lines of the form
//!
//! ```text
//! Manual Allocator || 1000 OPS || TOTAL: 1.2ms || AVERAGE: 1.2µs
//! ```
//!
//! Blank lines and lines with fewer than four columns are skipped. A bad
//! operation count or a timing column without a `:` aborts the whole parse,
//! while a timing that is not a recognized duration counts as zero seconds.

use crate::aggregate::AggregationMap;
use crate::duration::to_seconds;
use crate::error::{Error, Result};

use logger::*;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const FIELD_SEPARATOR: &str = "||";
pub const MIN_COLUMNS: usize = 4;

const LABEL_COLUMN: usize = 0;
const COUNT_COLUMN: usize = 1;
const TOTAL_COLUMN: usize = 2;
const AVERAGE_COLUMN: usize = 3;

/// One benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRecord {
    line: usize,
    label: String,
    operations: u64,
    total: f64,
    average: f64,
}

impl BenchmarkRecord {
    /// Parses one line; `line` is its 1-based position, used in errors.
    ///
    /// Returns `Ok(None)` for lines that are blank or too short to be a
    /// record.
    pub fn parse(text: &str, line: usize) -> Result<Option<BenchmarkRecord>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let columns: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        if columns.len() < MIN_COLUMNS {
            trace!("line {}: {} columns, skipping", line, columns.len());
            return Ok(None);
        }

        let count = columns[COUNT_COLUMN]
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::MissingCount { line })?;
        let operations = count.parse::<u64>().map_err(|source| Error::InvalidCount {
            line,
            value: count.to_string(),
            source,
        })?;

        let total = to_seconds(timing(columns[TOTAL_COLUMN], line, TOTAL_COLUMN)?);
        let average = to_seconds(timing(columns[AVERAGE_COLUMN], line, AVERAGE_COLUMN)?);

        Ok(Some(BenchmarkRecord {
            line,
            label: columns[LABEL_COLUMN].trim().to_string(),
            operations,
            total,
            average,
        }))
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }

    /// Wall-clock time of the run, in seconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Time per operation, in seconds.
    pub fn average(&self) -> f64 {
        self.average
    }
}

// the text after the first ':' of a "LABEL: <duration>" column
fn timing(column: &str, line: usize, index: usize) -> Result<&str> {
    column
        .split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| Error::MissingSeparator {
            line,
            column: index + 1,
        })
}

/// Result of scanning an input.
#[derive(Clone, Debug, Default)]
pub struct Parsed {
    pub map: AggregationMap,
    /// lines that became records
    pub records: usize,
    /// non-blank lines with too few columns
    pub skipped: usize,
}

pub fn parse_reader<R: BufRead>(reader: R, path: &str) -> Result<Parsed> {
    let mut parsed = Parsed::default();
    for (index, text) in reader.lines().enumerate() {
        let text = text.map_err(|source| Error::Input {
            path: path.to_string(),
            source,
        })?;
        match BenchmarkRecord::parse(&text, index + 1)? {
            Some(record) => {
                trace!(
                    "line {}: {} ops={} total={}s average={}s",
                    record.line(),
                    record.label(),
                    record.operations(),
                    record.total(),
                    record.average()
                );
                parsed.map.insert(&record);
                parsed.records += 1;
            }
            None if !text.trim().is_empty() => parsed.skipped += 1,
            None => {}
        }
    }
    Ok(parsed)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Parsed> {
    let path = path.as_ref();
    let name = path.display().to_string();
    debug!("reading {}", name);
    let file = File::open(path).map_err(|source| Error::Input {
        path: name.clone(),
        source,
    })?;
    parse_reader(BufReader::new(file), &name)
}
