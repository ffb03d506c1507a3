// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame image loading.
//!
//! Images are decoded with the `image` crate into a plain 8-bit buffer,
//! optionally reduced to gray levels.

use crate::error::{BrowserError, Result};
use crate::models::frame::FrameImage;
use std::path::Path;

/// Decode the image at `path`, converting it to gray levels when `to_gray`.
pub fn load_image(path: &Path, to_gray: bool) -> Result<FrameImage> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => BrowserError::io(path, source),
        source => BrowserError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let (width, height) = (img.width(), img.height());
    let pixels = if to_gray {
        img.to_luma8().into_raw()
    } else {
        img.to_rgba8().into_raw()
    };

    Ok(FrameImage {
        width,
        height,
        grayscale: to_gray,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_gray_and_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([255, 0, 0]))
            .save(&path)
            .unwrap();

        let gray = load_image(&path, true).unwrap();
        assert_eq!((gray.width, gray.height), (3, 2));
        assert!(gray.grayscale);
        assert_eq!(gray.pixels.len(), 6);

        let color = load_image(&path, false).unwrap();
        assert!(!color.grayscale);
        assert_eq!(color.pixels.len(), 24);
        assert_eq!(&color.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();

        assert!(matches!(
            load_image(&path, true),
            Err(BrowserError::Decode { .. })
        ));
    }

    #[test]
    fn test_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_image(&dir.path().join("none.png"), true),
            Err(BrowserError::Io { .. })
        ));
    }
}
