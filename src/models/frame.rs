// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame data structures.
//!
//! A frame is one decoded (landmarks, image) pair. Frames are read-only:
//! they are produced by a frame source and either displayed or dropped.

use serde::{Deserialize, Serialize};

/// A landmark position in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A decoded 8-bit image, either single-channel or RGBA, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    pub grayscale: bool,
    pub pixels: Vec<u8>,
}

impl FrameImage {
    /// Number of bytes per pixel in `pixels`.
    pub fn channels(&self) -> usize {
        if self.grayscale {
            1
        } else {
            4
        }
    }

    /// Expand the buffer to RGBA for texture upload.
    pub fn to_rgba(&self) -> Vec<u8> {
        if !self.grayscale {
            return self.pixels.clone();
        }
        self.pixels
            .iter()
            .flat_map(|&v| [v, v, v, u8::MAX])
            .collect()
    }
}

/// One frame of a video: its landmark points and its image.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub points: Vec<Point>,
    pub image: FrameImage,
}
