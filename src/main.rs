// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use benchgraph::{Config, Error, NAME, VERSION};
use logger::*;

use std::path::Path;
use std::process;

pub fn main() {
    let config = match Config::new() {
        Ok(config) => config,
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => {
            println!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let input = match config.input() {
        Some(input) => input.to_string(),
        None => {
            println!("Usage: {} <csv_file>", NAME);
            process::exit(1);
        }
    };

    if !Path::new(&input).is_file() {
        println!("Error: file '{}' not found.", input);
        process::exit(1);
    }

    Logger::new()
        .label(NAME)
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("{} {} initializing...", NAME, VERSION);
    config.print();

    if let Err(e) = benchgraph::run(&config, &input) {
        fatal!("{}", e);
    }
}
