// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod chart;
mod general;

pub use self::chart::Chart;
pub use self::general::General;

use crate::error::{Error, Result};

use clap::{value_t, App, Arg, ArgMatches};
use logger::*;
use serde_derive::Deserialize;

use std::ffi::OsString;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    chart: Chart,
    #[serde(skip)]
    input: Option<String>,
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Result<Config> {
        Self::from_args(std::env::args_os())
    }

    /// parse an explicit argument list, program name first
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::app().get_matches_from_safe(args)?;

        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)?
        } else {
            Default::default()
        };

        config.input = matches.value_of("input").map(|input| input.to_string());

        if let Some(width) = parse_pixels(&matches, "width")? {
            config.chart.set_width(width);
        }

        if let Some(height) = parse_pixels(&matches, "height")? {
            config.chart.set_height(height);
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => config.general.set_logging(Level::Debug),
            _ => config.general.set_logging(Level::Trace),
        }

        config.validate()?;
        Ok(config)
    }

    fn app<'a, 'b>() -> App<'a, 'b> {
        App::new(NAME)
            .version(VERSION)
            .about("Charts benchmark timings against operation count")
            .arg(
                Arg::with_name("input")
                    .value_name("FILE")
                    .help("Benchmark results file with '||' separated columns")
                    .index(1),
            )
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .value_name("FILE")
                    .help("TOML config file")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("width")
                    .long("width")
                    .value_name("Pixels")
                    .help("Width of the rendered charts")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("height")
                    .long("height")
                    .value_name("Pixels")
                    .help("Height of the rendered charts")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Increase verbosity by one level. Can be used more than once")
                    .multiple(true),
            )
    }

    fn load_from_file(file: &str) -> Result<Config> {
        let content = std::fs::read_to_string(file).map_err(|source| Error::ConfigRead {
            path: file.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: file.to_string(),
            source,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.chart.width() == 0 || self.chart.height() == 0 {
            return Err(Error::InvalidConfig(format!(
                "chart size {}x{} must be non-zero",
                self.chart.width(),
                self.chart.height()
            )));
        }
        Ok(())
    }

    /// The positional input path, if one was given
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn logging(&self) -> Level {
        self.general.logging()
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn print(&self) {
        debug!("-----");
        debug!("Config: Input: {}", self.input().unwrap_or("<none>"));
        debug!(
            "Config: Chart: {}x{}",
            self.chart.width(),
            self.chart.height()
        );
        debug!("Config: Logging: {}", self.logging());
        debug!("-----");
    }
}

fn parse_pixels(matches: &ArgMatches, key: &str) -> Result<Option<u32>> {
    if matches.is_present(key) {
        Ok(Some(value_t!(matches, key, u32)?))
    } else {
        Ok(None)
    }
}
