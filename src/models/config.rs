// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Browser settings.
//!
//! Settings can be loaded from a YAML or JSON file; every field has a
//! default so a partial file is accepted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings controlling file discovery, decoding and playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Extension of the frame images, including the dot.
    pub image_ext: String,
    /// Extension of the landmark files, including the dot.
    pub shape_ext: String,
    /// Convert images to gray levels on decode.
    pub to_gray: bool,
    /// Delay between two frames during playback.
    pub play_delay_ms: u64,
    /// Start playback as soon as the first video is shown.
    pub autoplay: bool,
    /// Radius of the landmark markers, in screen pixels.
    pub point_radius: f32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            image_ext: ".png".to_string(),
            shape_ext: ".pts".to_string(),
            to_gray: true,
            play_delay_ms: 5,
            autoplay: false,
            point_radius: 2.5,
        }
    }
}

impl BrowserConfig {
    pub fn play_delay(&self) -> Duration {
        Duration::from_millis(self.play_delay_ms)
    }
}
