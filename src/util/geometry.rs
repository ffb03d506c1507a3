// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate and position conversions.
//!
//! This module maps frame indices to normalized slider positions and back,
//! and maps image pixel coordinates onto the area an image is drawn into.

use crate::models::frame::Point;

/// Normalized position (0.0 to 1.0) of `index` in a sequence of `len` frames.
///
/// A sequence of zero or one frame always sits at 0.0.
pub fn frame_to_position(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    (index.min(len - 1)) as f64 / (len - 1) as f64
}

/// Frame index for a normalized position, rounded to the nearest frame and
/// clamped to `[0, len - 1]`.
pub fn position_to_frame(position: f64, len: usize) -> usize {
    if len <= 1 || !position.is_finite() {
        return 0;
    }
    let last = (len - 1) as f64;
    (position.clamp(0.0, 1.0) * last).round() as usize
}

/// Scale and offset placing an image of `image_size` centered inside
/// `available`, preserving its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub scale: f32,
    pub offset: (f32, f32),
    pub size: (f32, f32),
}

/// Fit an image into the available area.
pub fn fit_image(image_size: (u32, u32), available: (f32, f32)) -> Fit {
    let (img_width, img_height) = (image_size.0.max(1) as f32, image_size.1.max(1) as f32);
    let scale = (available.0 / img_width).min(available.1 / img_height).max(0.0);
    let size = (img_width * scale, img_height * scale);
    Fit {
        scale,
        offset: ((available.0 - size.0) / 2.0, (available.1 - size.1) / 2.0),
        size,
    }
}

/// Convert a point in image pixels to coordinates relative to the area the
/// image was fitted into.
pub fn image_to_screen(point: &Point, fit: &Fit) -> (f32, f32) {
    (
        fit.offset.0 + point.x as f32 * fit.scale,
        fit.offset.1 + point.y as f32 * fit.scale,
    )
}
