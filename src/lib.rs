// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reads benchmark result logs with `||` separated columns, averages the
//! reported timings per operation count and charts them as PNG files.

mod aggregate;
mod chart;
mod config;
mod duration;
mod error;
mod record;

pub use crate::aggregate::{AggregationMap, Bucket, ChartSeries, Metric, SummaryRow};
pub use crate::chart::{x_range, y_range, ChartSpec, Renderer, AVERAGE, TOTAL};
pub use crate::config::{Chart, Config, General, NAME, VERSION};
pub use crate::duration::{parse_seconds, to_seconds, Unit};
pub use crate::error::{Error, Result};
pub use crate::record::{parse_file, parse_reader, BenchmarkRecord, Parsed, FIELD_SEPARATOR};

use logger::*;

/// Parses `input`, logs a summary and writes both charts next to it.
///
/// Returns the paths of the written images.
pub fn run(config: &Config, input: &str) -> Result<Vec<String>> {
    let parsed = parse_file(input)?;
    print_summary(&parsed);

    let renderer = Renderer::new(config.chart())?;
    let written = renderer.render_all(&parsed.map, input)?;
    for path in &written {
        info!("wrote {}", path);
    }
    Ok(written)
}

fn print_summary(parsed: &Parsed) {
    info!("-----");
    info!(
        "Parsed: Records: {} Skipped: {} Buckets: {}",
        parsed.records,
        parsed.skipped,
        parsed.map.len()
    );
    for row in parsed.map.summary() {
        info!(
            "OPS: {:>10} Runs: {:>4} Total: {:.6e}s Average: {:.6e}s",
            row.operations, row.runs, row.total, row.average
        );
    }
    info!("-----");
}
