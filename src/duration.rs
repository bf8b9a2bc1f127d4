// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion of human-readable durations such as `12.5ms` or `340ns` into
//! seconds.

use lazy_static::lazy_static;
use logger::*;
use regex::Regex;
use strum_macros::{EnumString, IntoStaticStr};

use std::str::FromStr;

lazy_static! {
    static ref DURATION: Regex = Regex::new(r"^([0-9.]+)([a-zµ]+)").unwrap();
}

#[derive(Clone, Copy, Debug, EnumString, Eq, IntoStaticStr, PartialEq)]
pub enum Unit {
    #[strum(serialize = "ns")]
    Nanoseconds,
    #[strum(serialize = "µs")]
    Microseconds,
    #[strum(serialize = "ms")]
    Milliseconds,
    #[strum(serialize = "s")]
    Seconds,
}

impl Unit {
    /// Number of seconds in one of this unit.
    pub fn scale(self) -> f64 {
        match self {
            Unit::Nanoseconds => 1e-9,
            Unit::Microseconds => 1e-6,
            Unit::Milliseconds => 1e-3,
            Unit::Seconds => 1.0,
        }
    }
}

/// Parses the leading `<number><unit>` of `text` into seconds.
///
/// Returns `None` when the text does not start with a number followed by a
/// unit, when the number itself is malformed (`1.2.3`), or when the unit is
/// not one of `ns`, `µs`, `ms` or `s`. Anything after the unit is ignored.
pub fn parse_seconds(text: &str) -> Option<f64> {
    let captures = DURATION.captures(text.trim())?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = Unit::from_str(captures.get(2)?.as_str()).ok()?;
    Some(value * unit.scale())
}

/// Like [`parse_seconds`] but unparseable durations count as zero seconds.
pub fn to_seconds(text: &str) -> f64 {
    match parse_seconds(text) {
        Some(seconds) => seconds,
        None => {
            debug!("unrecognized duration {:?}, using 0s", text);
            0.0
        }
    }
}
