// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixtures shared by the unit tests.

use std::path::Path;

/// Write a `<stem>.png` / `<stem>.pts` pair whose pixels and first point
/// encode `seed`, so frames can be told apart after reads.
pub fn write_frame(folder: &Path, stem: &str, seed: u8) {
    image::GrayImage::from_pixel(4, 3, image::Luma([seed]))
        .save(folder.join(format!("{stem}.png")))
        .unwrap();
    let pts = format!("version: 1\nn_points: 2\n{{\n{seed} 1.0\n2.0 {seed}\n}}\n");
    std::fs::write(folder.join(format!("{stem}.pts")), pts).unwrap();
}

/// Create `<root>/<video>/` holding `frames` pairs named `f0..fN`, seeded
/// with `base + i`.
pub fn write_video(root: &Path, video: &str, frames: u8, base: u8) {
    let folder = root.join(video);
    std::fs::create_dir_all(&folder).unwrap();
    for i in 0..frames {
        write_frame(&folder, &format!("f{i}"), base + i);
    }
}
