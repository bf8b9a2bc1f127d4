// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! PNG line charts of aggregated timings against operation count.

use crate::aggregate::{AggregationMap, ChartSeries, Metric};
use crate::config::Chart as ChartConfig;
use crate::error::{Error, Result};

use logger::*;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use std::error::Error as StdError;
use std::ops::Range;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const FONT: &str = "sans-serif";
const CAPTION_SIZE: u32 = 24;
const LABEL_SIZE: u32 = 16;
const MARKER_RADIUS: u32 = 4;
const STROKE_WIDTH: u32 = 2;
// fraction of the data span added on each side of an axis
const MARGIN: f64 = 0.05;

/// Fixed description of one of the two charts.
#[derive(Clone, Copy, Debug)]
pub struct ChartSpec {
    pub metric: Metric,
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub suffix: &'static str,
    pub colour: RGBColor,
}

pub const TOTAL: ChartSpec = ChartSpec {
    metric: Metric::Total,
    title: "Total Time vs. OPS",
    x_desc: "OPS (iterations)",
    y_desc: "Total Time (seconds)",
    suffix: "_total.png",
    colour: hexcolour!(0x1F77B4),
};

pub const AVERAGE: ChartSpec = ChartSpec {
    metric: Metric::Average,
    title: "Average Time per Operation vs. OPS",
    x_desc: "OPS (iterations)",
    y_desc: "Time per Operation (seconds)",
    suffix: "_average.png",
    colour: hexcolour!(0xFFA500),
};

impl ChartSpec {
    /// Output file for an input path; the suffix is appended to the path
    /// string as given.
    pub fn output_path(&self, input: &str) -> String {
        format!("{}{}", input, self.suffix)
    }
}

pub struct Renderer {
    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a renderer, registering the embedded chart font.
    pub fn new(config: &ChartConfig) -> Result<Self> {
        let font: &'static [u8] = dejavu::sans_mono::regular();
        register_font(FONT, FontStyle::Normal, font)
            .map_err(|_| Error::Font("invalid font data".to_string()))?;
        Ok(Self {
            width: config.width(),
            height: config.height(),
        })
    }

    /// Draws both charts for `map`, returning the written paths in order.
    ///
    /// If the second chart fails the first stays on disk.
    pub fn render_all(&self, map: &AggregationMap, input: &str) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for spec in &[TOTAL, AVERAGE] {
            let path = spec.output_path(input);
            self.render(spec, &map.series(spec.metric), &path)?;
            written.push(path);
        }
        Ok(written)
    }

    pub fn render(&self, spec: &ChartSpec, series: &ChartSeries, path: &str) -> Result<()> {
        debug!("rendering {} points to {}", series.len(), path);
        if series.is_empty() {
            warn!("no data for {}, writing an empty chart", path);
        }
        self.draw(spec, series, path).map_err(|e| Error::Render {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn draw(
        &self,
        spec: &ChartSpec,
        series: &ChartSeries,
        path: &str,
    ) -> std::result::Result<(), Box<dyn StdError>> {
        let points = series.points();
        let x_range = x_range(series.operations());
        let y_range = y_range(series.values());

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title, (FONT, CAPTION_SIZE))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_desc)
            .y_desc(spec.y_desc)
            .label_style((FONT, LABEL_SIZE))
            .axis_desc_style((FONT, LABEL_SIZE))
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format_seconds(*y))
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            spec.colour.stroke_width(STROKE_WIDTH),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, MARKER_RADIUS, spec.colour.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}

fn format_seconds(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{:.2e}", value)
    }
}

/// Smallest to largest operation count, padded on both sides.
pub fn x_range(operations: &[u64]) -> Range<f64> {
    let min = operations.iter().min().copied();
    let max = operations.iter().max().copied();
    match (min, max) {
        (Some(min), Some(max)) => pad(min as f64, max as f64),
        _ => 0.0..1.0,
    }
}

/// Zero to the largest value, padded on both sides.
pub fn y_range(values: &[f64]) -> Range<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    let min = values.iter().copied().fold(0.0, f64::min);
    pad(min, max)
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if span > 0.0 {
        (min - span * MARGIN)..(max + span * MARGIN)
    } else if min != 0.0 {
        let half = min.abs() * MARGIN;
        (min - half)..(max + half)
    } else {
        -MARGIN..(1.0 + MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_takes_configured_size() {
        let mut config = ChartConfig::default();
        config.set_width(320);
        config.set_height(200);
        let renderer = Renderer::new(&config).unwrap();
        assert_eq!((renderer.width, renderer.height), (320, 200));
    }

    #[test]
    fn output_paths() {
        assert_eq!(TOTAL.output_path("results.txt"), "results.txt_total.png");
        assert_eq!(AVERAGE.output_path("dir/run.csv"), "dir/run.csv_average.png");
    }

    #[test]
    fn chart_labels() {
        assert_eq!(TOTAL.metric, Metric::Total);
        assert_eq!(TOTAL.title, "Total Time vs. OPS");
        assert_eq!(AVERAGE.metric, Metric::Average);
        assert_eq!(AVERAGE.y_desc, "Time per Operation (seconds)");
        assert_eq!(AVERAGE.colour, RGBColor(0xFF, 0xA5, 0x00));
    }

    #[test]
    fn x_range_spans_operations() {
        let range = x_range(&[100, 200, 1100]);
        assert!(range.start < 100.0 && range.start > 0.0);
        assert!(range.end > 1100.0 && range.end < 1200.0);
    }

    #[test]
    fn y_range_starts_at_zero() {
        let range = y_range(&[0.5, 2.0]);
        assert!(range.start < 0.0);
        assert!(range.end > 2.0);
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let single = x_range(&[1000]);
        assert!(single.start < 1000.0 && single.end > 1000.0);

        let zeros = y_range(&[0.0, 0.0]);
        assert!(zeros.start < zeros.end);

        let empty = x_range(&[]);
        assert!(empty.start < empty.end);
        let empty = y_range(&[]);
        assert!(empty.start < empty.end);
    }

    #[test]
    fn seconds_labels() {
        assert_eq!(format_seconds(0.0), "0");
        assert_eq!(format_seconds(0.00025), "2.50e-4");
    }

    #[test]
    fn renders_both_charts() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.txt");
        let input = input.to_str().unwrap();

        let mut map = AggregationMap::new();
        map.record(100, 1.0, 0.01);
        map.record(200, 2.5, 0.0125);
        map.record(400, 4.0, 0.01);

        let renderer = Renderer::new(&ChartConfig::default()).unwrap();
        let written = renderer.render_all(&map, input).unwrap();
        assert_eq!(
            written,
            vec![format!("{}_total.png", input), format!("{}_average.png", input)]
        );
        for path in &written {
            let bytes = std::fs::read(path).unwrap();
            assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    fn renders_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty_total.png");
        let path = path.to_str().unwrap();

        let renderer = Renderer::new(&ChartConfig::default()).unwrap();
        renderer
            .render(&TOTAL, &AggregationMap::new().series(Metric::Total), path)
            .unwrap();
        assert!(std::path::Path::new(path).exists());
    }
}
