// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping of benchmark records by operation count.

use crate::record::BenchmarkRecord;

use std::collections::btree_map::{self, BTreeMap};

/// The `(total, average)` timings, in seconds, of every run that shares one
/// operation count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bucket {
    samples: Vec<(f64, f64)>,
}

impl Bucket {
    pub fn push(&mut self, total: f64, average: f64) {
        self.samples.push((total, average));
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean_total(&self) -> f64 {
        mean(self.samples.iter().map(|(total, _)| *total), self.len())
    }

    pub fn mean_average(&self) -> f64 {
        mean(self.samples.iter().map(|(_, average)| *average), self.len())
    }

    pub fn mean(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Total => self.mean_total(),
            Metric::Average => self.mean_average(),
        }
    }
}

fn mean<I: Iterator<Item = f64>>(values: I, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

/// Which timing of a run a chart plots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Metric {
    Total,
    Average,
}

/// Buckets keyed by operation count, iterated in ascending key order.
///
/// A bucket only exists once a sample has been added to it, so every bucket
/// has at least one sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregationMap {
    buckets: BTreeMap<u64, Bucket>,
}

impl AggregationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operations: u64, total: f64, average: f64) {
        self.buckets
            .entry(operations)
            .or_default()
            .push(total, average);
    }

    pub fn insert(&mut self, record: &BenchmarkRecord) {
        self.record(record.operations(), record.total(), record.average());
    }

    pub fn get(&self, operations: u64) -> Option<&Bucket> {
        self.buckets.get(&operations)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of samples across all buckets.
    pub fn samples(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }

    pub fn keys(&self) -> Vec<u64> {
        self.buckets.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, Bucket> {
        self.buckets.iter()
    }

    /// Per-bucket means of `metric`, ordered by operation count.
    pub fn series(&self, metric: Metric) -> ChartSeries {
        let mut series = ChartSeries::default();
        for (operations, bucket) in self {
            series.operations.push(*operations);
            series.values.push(bucket.mean(metric));
        }
        series
    }

    pub fn summary(&self) -> Vec<SummaryRow> {
        self.iter()
            .map(|(operations, bucket)| SummaryRow {
                operations: *operations,
                runs: bucket.len(),
                total: bucket.mean_total(),
                average: bucket.mean_average(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AggregationMap {
    type Item = (&'a u64, &'a Bucket);
    type IntoIter = btree_map::Iter<'a, u64, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parallel operation counts and averaged values for one chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSeries {
    operations: Vec<u64>,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn operations(&self) -> &[u64] {
        &self.operations
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.operations
            .iter()
            .zip(self.values.iter())
            .map(|(x, y)| (*x as f64, *y))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryRow {
    pub operations: u64,
    pub runs: usize,
    pub total: f64,
    pub average: f64,
}
