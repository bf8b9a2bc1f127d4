// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Cli(#[from] clap::Error),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },
    #[error("line {line}: missing operation count")]
    MissingCount { line: usize },
    #[error("line {line}: invalid operation count {value:?}: {source}")]
    InvalidCount {
        line: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("line {line}: column {column} has no ':' separator")]
    MissingSeparator { line: usize, column: usize },
    #[error("failed to load chart font: {0}")]
    Font(String),
    #[error("failed to render {path}: {reason}")]
    Render { path: String, reason: String },
}
