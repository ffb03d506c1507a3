// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! In-memory frame and video sources for exercising navigation without disk.

use super::FrameSource;
use crate::catalog::VideoSource;
use crate::error::{BrowserError, Result};
use crate::models::frame::{Frame, FrameImage, Point};
use std::cell::Cell;
use std::path::Path;

/// Build a 1x1 gray frame whose pixel and single point carry `tag`.
pub fn tagged_frame(tag: u8) -> Frame {
    Frame {
        points: vec![Point::new(tag as f64, 0.0)],
        image: FrameImage {
            width: 1,
            height: 1,
            grayscale: true,
            pixels: vec![tag],
        },
    }
}

/// Frames held in a vector. `fail_get` / `fail_delete` inject errors.
#[derive(Debug, Clone, Default)]
pub struct MemoryFrames {
    pub frames: Vec<Frame>,
    pub fail_get: Option<usize>,
    pub fail_delete: bool,
}

impl MemoryFrames {
    pub fn tagged(tags: impl IntoIterator<Item = u8>) -> Self {
        Self {
            frames: tags.into_iter().map(tagged_frame).collect(),
            ..Self::default()
        }
    }
}

impl FrameSource for MemoryFrames {
    fn len(&self) -> usize {
        self.frames.len()
    }

    fn get(&self, index: usize) -> Result<Frame> {
        if self.fail_get == Some(index) {
            return Err(BrowserError::io(
                format!("mem/{index}"),
                std::io::Error::new(std::io::ErrorKind::InvalidData, "injected"),
            ));
        }
        self.frames.get(index).cloned().ok_or(BrowserError::OutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(BrowserError::OutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        if self.fail_delete {
            return Err(BrowserError::io(
                format!("mem/{index}"),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "injected"),
            ));
        }
        self.frames.remove(index);
        Ok(())
    }
}

/// A fixed list of named videos. Counts how many times `load` ran.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    pub videos: Vec<(String, MemoryFrames)>,
    pub loads: Cell<usize>,
}

impl MemoryCatalog {
    /// One video per entry of `sizes`; frame tags are `10 * video + frame`.
    pub fn with_sizes(sizes: &[u8]) -> Self {
        let videos = sizes
            .iter()
            .enumerate()
            .map(|(v, &n)| {
                let base = 10 * v as u8;
                (format!("video{v}"), MemoryFrames::tagged(base..base + n))
            })
            .collect();
        Self {
            videos,
            loads: Cell::new(0),
        }
    }
}

impl VideoSource for MemoryCatalog {
    type Frames = MemoryFrames;

    fn root(&self) -> &Path {
        Path::new("memory")
    }

    fn len(&self) -> usize {
        self.videos.len()
    }

    fn name(&self, index: usize) -> Result<&str> {
        self.videos
            .get(index)
            .map(|(name, _)| name.as_str())
            .ok_or(BrowserError::OutOfRange {
                index,
                len: self.videos.len(),
            })
    }

    fn load(&self, index: usize) -> Result<MemoryFrames> {
        self.loads.set(self.loads.get() + 1);
        self.videos
            .get(index)
            .map(|(_, frames)| frames.clone())
            .ok_or(BrowserError::OutOfRange {
                index,
                len: self.videos.len(),
            })
    }
}
