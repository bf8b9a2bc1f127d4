// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde_derive::Deserialize;

/// Output image settings. The defaults give the 8x5 inch, 100 dpi figure
/// the charts were originally drawn at.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chart {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
}

impl Default for Chart {
    fn default() -> Chart {
        Chart {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Chart {
    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, pixels: u32) {
        self.width = pixels;
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_height(&mut self, pixels: u32) {
        self.height = pixels;
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    500
}
